// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v2.0
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Entry point for the pass framework: the pass trait, the registry of
//! named passes, the pipeline builder and the executor.

pub mod manager;
pub mod pipeline;
pub mod registry;
pub mod traits;

pub use manager::{AfterPassHook, PassManager};
pub use pipeline::{Pipeline, PipelineError};
pub use registry::{
    PassFilter, PassRegistry, PassRegistryBuilder, Provenance, RegisteredPass, RegistryError,
    SELECT_ALL, SELECT_INTEGRATED, SELECT_NATIVE,
};
pub use traits::{pass_name, Pass, PassError};
