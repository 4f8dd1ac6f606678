// CLASSIFICATION: COMMUNITY
// Filename: context.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Context container for IR-level transformations.
//! Holds the dialect registry consulted whenever a module is validated.

use log::trace;

use crate::ir::dialect::{Dialect, DialectError, DialectRegistry};
use crate::ir::Module;

/// Per-run IR context. Populated during startup, read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct Context {
    dialects: DialectRegistry,
    allow_unregistered: bool,
}

impl Context {
    /// Create a new context with no dialects registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept operations from unregistered dialects during validation.
    pub fn allow_unregistered(mut self, allow: bool) -> Self {
        self.allow_unregistered = allow;
        self
    }

    pub fn allows_unregistered(&self) -> bool {
        self.allow_unregistered
    }

    /// Register a dialect's vocabulary with this context.
    pub fn register_dialect(&mut self, dialect: Dialect) -> Result<(), DialectError> {
        self.dialects.register(dialect)
    }

    pub fn dialects(&self) -> &DialectRegistry {
        &self.dialects
    }

    /// Check that every node in `module` belongs to a registered dialect.
    pub fn validate(&self, module: &Module) -> Result<(), DialectError> {
        if self.allow_unregistered {
            return Ok(());
        }
        module.try_walk(&mut |op| {
            if self.dialects.is_legal(&op.name) {
                Ok(())
            } else {
                trace!("rejecting unregistered operation {}", op.name);
                Err(DialectError::UnknownDialectNode {
                    kind: op.name.clone(),
                })
            }
        })
    }
}
