// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Top-level error for a choco-opt run. Every stage keeps its own error
//! type; this enum only aggregates them so the driver can report the stage
//! that failed.

use std::io;

use thiserror::Error;

use crate::frontend::FrontendError;
use crate::ir::DialectError;
use crate::opt::config::ConfigError;
use crate::output::OutputError;
use crate::pass_framework::{PipelineError, RegistryError};

#[derive(Debug, Error)]
pub enum OptError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialect(#[from] DialectError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),
    #[error(transparent)]
    Frontend(#[from] FrontendError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type OptResult<T> = Result<T, OptError>;
