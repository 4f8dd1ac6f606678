// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Output serializer: renders the final module for a target format and
//! writes it to the output stream.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::ir::Module;

/// Supported output formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Target {
    /// Generic IR text, re-parsable by the `ir` frontend.
    #[default]
    Ir,
    /// Pretty-printed JSON of the module structure.
    Json,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Ir, Target::Json];

    pub fn name(self) -> &'static str {
        match self {
            Target::Ir => "ir",
            Target::Json => "json",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| OutputError::UnknownTarget(s.to_string()))
    }
}

/// Errors produced while rendering or writing output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unknown output target `{0}`")]
    UnknownTarget(String),
    #[error("failed to serialize module: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Render `module` for `target`. Deterministic for a given module.
pub fn render(module: &Module, target: Target) -> Result<String, OutputError> {
    match target {
        Target::Ir => Ok(module.print_ir()),
        Target::Json => {
            let mut text = serde_json::to_string_pretty(module)?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Helper to infer the target from an output file extension.
/// `.json` -> Json, `.ir` or `.mlir` -> Ir.
pub fn infer_target_from_path(path: &Path) -> Option<Target> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Some(Target::Json),
        Some("ir") | Some("mlir") => Some(Target::Ir),
        _ => None,
    }
}

/// Write `text` with a single buffered write followed by a flush.
pub fn write_output<W: Write>(text: &str, mut out: W) -> Result<(), OutputError> {
    out.write_all(text.as_bytes()).map_err(OutputError::Write)?;
    out.flush().map_err(OutputError::Write)?;
    debug!("wrote {} bytes of output", text.len());
    Ok(())
}
