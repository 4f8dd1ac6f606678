// CLASSIFICATION: COMMUNITY
// Filename: verify.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

use crate::ir::{Context, Module};
use crate::pass_framework::{Pass, PassError};

/// Re-validates the module against the context's dialects.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verify;

impl Pass for Verify {
    fn description(&self) -> &str {
        "fail if any operation is outside the registered dialects"
    }

    fn run(&self, ctx: &Context, module: &mut Module) -> Result<(), PassError> {
        ctx.validate(module)?;
        Ok(())
    }
}
