// CLASSIFICATION: COMMUNITY
// Filename: nop.rs v2.0
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! A pass that leaves the module untouched.

use crate::ir::{Context, Module};
use crate::pass_framework::{Pass, PassError};

/// Identity pass, handy for exercising pipelines.
pub struct Nop;

impl Nop {
    /// Create a new identity pass.
    pub fn new() -> Self {
        Nop {}
    }
}

impl Pass for Nop {
    fn description(&self) -> &str {
        "does nothing"
    }

    fn run(&self, _ctx: &Context, _module: &mut Module) -> Result<(), PassError> {
        Ok(())
    }
}

impl Default for Nop {
    fn default() -> Self {
        Self::new()
    }
}
