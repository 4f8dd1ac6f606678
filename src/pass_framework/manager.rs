// CLASSIFICATION: COMMUNITY
// Filename: manager.rs v2.0
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! PassManager executes a pipeline against a module, stopping at the first
//! failing pass.

use std::time::Instant;

use log::{debug, warn};

use super::pipeline::{Pipeline, PipelineError};
use crate::ir::{Context, Module};

/// Callback invoked after each successful pass with its index, name and the
/// resulting module.
pub type AfterPassHook = Box<dyn Fn(usize, &str, &Module) + Send + Sync>;

/// Runs a [`Pipeline`] with optional per-pass verification.
pub struct PassManager {
    pipeline: Pipeline,
    verify_each: bool,
    after_each: Option<AfterPassHook>,
}

impl PassManager {
    /// Creates a manager for `pipeline` with verification disabled.
    pub fn new(pipeline: Pipeline) -> Self {
        PassManager {
            pipeline,
            verify_each: false,
            after_each: None,
        }
    }

    /// Re-validate the module against the context after every pass.
    pub fn verify_each(mut self, on: bool) -> Self {
        self.verify_each = on;
        self
    }

    /// Install a hook run after every successful pass.
    pub fn after_each(mut self, hook: impl Fn(usize, &str, &Module) + Send + Sync + 'static) -> Self {
        self.after_each = Some(Box::new(hook));
        self
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Returns the number of scheduled passes.
    pub fn count(&self) -> usize {
        self.pipeline.len()
    }

    /// Executes all passes in order against `module`.
    pub fn run(&self, ctx: &Context, module: &mut Module) -> Result<(), PipelineError> {
        execute(
            &self.pipeline,
            ctx,
            module,
            self.verify_each,
            self.after_each.as_ref(),
        )
    }
}

pub(crate) fn execute(
    pipeline: &Pipeline,
    ctx: &Context,
    module: &mut Module,
    verify_each: bool,
    after_each: Option<&AfterPassHook>,
) -> Result<(), PipelineError> {
    for (index, stage) in pipeline.stages().iter().enumerate() {
        let started = Instant::now();
        debug!("running pass {} (#{index})", stage.name());
        if let Err(source) = stage.pass().run(ctx, module) {
            warn!("pass {} (#{index}) failed: {source}", stage.name());
            return Err(PipelineError::PassExecution {
                name: stage.name().to_string(),
                index,
                source,
            });
        }
        if verify_each {
            ctx.validate(module)
                .map_err(|source| PipelineError::InvalidModuleAfterPass {
                    name: stage.name().to_string(),
                    index,
                    source,
                })?;
        }
        debug!(
            "pass {} (#{index}) finished in {:?}",
            stage.name(),
            started.elapsed()
        );
        if let Some(hook) = after_each {
            hook(index, stage.name(), module);
        }
    }
    Ok(())
}
