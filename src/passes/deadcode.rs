// CLASSIFICATION: COMMUNITY
// Filename: deadcode.rs v2.0
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! A pass that removes dead toy operations from the IR.

use crate::frontend::toy::{BLOCK, NOP};
use crate::ir::{Context, Module, Operation};
use crate::pass_framework::{Pass, PassError};

/// Dead Code Elimination pass implementation.
pub struct DeadCode;

impl DeadCode {
    /// Create a new dead code elimination pass.
    pub fn new() -> Self {
        DeadCode {}
    }

    /// `toy.nop`, and `toy.block` with nothing left inside.
    fn is_dead(op: &Operation) -> bool {
        op.is(NOP) || (op.is(BLOCK) && op.region.is_empty())
    }

    fn sweep(ops: &mut Vec<Operation>) {
        for op in ops.iter_mut() {
            Self::sweep(&mut op.region);
        }
        ops.retain(|op| !Self::is_dead(op));
    }
}

impl Pass for DeadCode {
    fn description(&self) -> &str {
        "remove toy.nop and empty toy.block operations"
    }

    fn run(&self, _ctx: &Context, module: &mut Module) -> Result<(), PassError> {
        Self::sweep(&mut module.ops);
        Ok(())
    }
}

impl Default for DeadCode {
    fn default() -> Self {
        Self::new()
    }
}
