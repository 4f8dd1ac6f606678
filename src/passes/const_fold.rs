// CLASSIFICATION: COMMUNITY
// Filename: const_fold.rs v2.0
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! A pass that performs constant folding on toy arithmetic.

use crate::frontend::toy::{self, ADD, LIT, MUL, VALUE};
use crate::ir::{Context, Module, Operation};
use crate::pass_framework::{Pass, PassError};

/// Constant folding pass implementation.
pub struct FoldConstants;

impl FoldConstants {
    /// Create a new constant folding pass.
    pub fn new() -> Self {
        FoldConstants {}
    }

    fn literal_value(op: &Operation) -> Option<i64> {
        if op.is(LIT) && op.region.is_empty() {
            op.attr(VALUE).and_then(|a| a.as_int())
        } else {
            None
        }
    }

    /// Folds children first so nested arithmetic collapses in one run.
    fn fold(op: &mut Operation) {
        for child in &mut op.region {
            Self::fold(child);
        }
        let combine: fn(i64, i64) -> Option<i64> = match op.name.as_str() {
            ADD => i64::checked_add,
            MUL => i64::checked_mul,
            _ => return,
        };
        let Some(values) = op
            .region
            .iter()
            .map(Self::literal_value)
            .collect::<Option<Vec<_>>>()
        else {
            return;
        };
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return;
        };
        // Overflowing folds are left for runtime.
        if let Some(result) = values.try_fold(first, combine) {
            *op = toy::lit(result);
        }
    }
}

impl Pass for FoldConstants {
    fn description(&self) -> &str {
        "fold toy.add / toy.mul over literal operands"
    }

    fn run(&self, _ctx: &Context, module: &mut Module) -> Result<(), PassError> {
        for op in &mut module.ops {
            Self::fold(op);
        }
        Ok(())
    }
}

impl Default for FoldConstants {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::toy::lit;

    #[test]
    fn folds_nested_arithmetic() {
        // (2 + 3) * 4
        let mut module = Module::new().with_op(
            Operation::new(MUL)
                .with_child(Operation::new(ADD).with_child(lit(2)).with_child(lit(3)))
                .with_child(lit(4)),
        );
        FoldConstants::new().run(&Context::new(), &mut module).unwrap();
        assert_eq!(module, Module::new().with_op(lit(20)));
    }

    #[test]
    fn leaves_non_literal_operands_alone() {
        let original = Module::new().with_op(
            Operation::new(ADD)
                .with_child(lit(1))
                .with_child(Operation::new("toy.print")),
        );
        let mut module = original.clone();
        FoldConstants::new().run(&Context::new(), &mut module).unwrap();
        assert_eq!(module, original);
    }

    #[test]
    fn overflow_and_empty_operands_are_not_folded() {
        let original = Module::new()
            .with_op(Operation::new(MUL).with_child(lit(i64::MAX)).with_child(lit(2)))
            .with_op(Operation::new(ADD));
        let mut module = original.clone();
        FoldConstants::new().run(&Context::new(), &mut module).unwrap();
        assert_eq!(module, original);
    }
}
