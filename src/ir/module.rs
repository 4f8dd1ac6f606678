// CLASSIFICATION: COMMUNITY
// Filename: module.rs v0.2
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Defines the IR Module, the root value threaded through a pass pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ir::operation::Operation;

/// A compilation unit holding an ordered list of top-level operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Optional symbol name (`module @name { ... }`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Top-level operations in program order.
    #[serde(default)]
    pub ops: Vec<Operation>,
}

impl Module {
    /// Creates a new anonymous, empty module.
    pub fn new() -> Self {
        Module::default()
    }

    /// Creates a new empty module with a symbol name.
    pub fn named(name: impl Into<String>) -> Self {
        Module {
            name: Some(name.into()),
            ops: Vec::new(),
        }
    }

    /// Appends a top-level operation.
    pub fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    /// Builder-style append.
    pub fn with_op(mut self, op: Operation) -> Self {
        self.ops.push(op);
        self
    }

    /// Total number of operations, nested ones included.
    pub fn op_count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_| n += 1);
        n
    }

    /// Visit every operation in pre-order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Operation)) {
        for op in &self.ops {
            op.walk(f);
        }
    }

    /// Pre-order visit that stops at the first error.
    pub fn try_walk<E>(&self, f: &mut impl FnMut(&Operation) -> Result<(), E>) -> Result<(), E> {
        for op in &self.ops {
            op.try_walk(f)?;
        }
        Ok(())
    }

    /// Mutable pre-order visit that stops at the first error.
    pub fn try_walk_mut<E>(
        &mut self,
        f: &mut impl FnMut(&mut Operation) -> Result<(), E>,
    ) -> Result<(), E> {
        for op in &mut self.ops {
            op.try_walk_mut(f)?;
        }
        Ok(())
    }

    /// Return a textual representation of the module using the IR printer.
    pub fn print_ir(&self) -> String {
        crate::ir::printer::print_module(self)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print_ir())
    }
}
