// CLASSIFICATION: COMMUNITY
// Filename: double_literal.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

use crate::frontend::toy::{LIT, VALUE};
use crate::ir::{Context, Module};
use crate::pass_framework::{Pass, PassError};

/// Doubles the value of every `toy.lit`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleLiteral;

impl Pass for DoubleLiteral {
    fn description(&self) -> &str {
        "replace every toy.lit n with toy.lit 2n"
    }

    fn run(&self, _ctx: &Context, module: &mut Module) -> Result<(), PassError> {
        module.try_walk_mut(&mut |op| {
            if !op.is(LIT) {
                return Ok(());
            }
            let value = op
                .attr(VALUE)
                .and_then(|a| a.as_int())
                .ok_or_else(|| PassError::failed("toy.lit without an integer `value`"))?;
            let doubled = value
                .checked_mul(2)
                .ok_or_else(|| PassError::failed(format!("doubling {value} overflows i64")))?;
            op.set_attr(VALUE, doubled);
            Ok(())
        })
    }
}
