// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v2.0
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Root library for the choco-opt optimizer driver.

/// Aggregate error for a driver run
pub mod error;

/// Source-format frontends and their registry
pub mod frontend;

/// IR core types, dialects and the generic text format
pub mod ir;

/// Driver, CLI configuration and logging setup
pub mod opt;

/// Output targets and serialization
pub mod output;

/// Pass trait, registry, pipeline builder and executor
pub mod pass_framework;
pub mod passes;

pub use error::{OptError, OptResult};

/// Parse `source` with the frontend for `tag`, run `passes` in order and
/// render the result for `target`, using the standard driver setup.
pub fn optimize_source(
    tag: &str,
    source: &str,
    passes: &[&str],
    target: output::Target,
) -> OptResult<String> {
    let opt = opt::OptMain::new(false)?;
    let pipeline = opt.build_pipeline(passes)?;
    let module = opt.parse_input(tag, source.as_bytes())?;
    opt.transform(&pass_framework::PassManager::new(pipeline), module, target)
}
