// CLASSIFICATION: COMMUNITY
// Filename: dialect.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Dialects and the registry that decides which node kinds are legal.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use thiserror::Error;

/// A named vocabulary of node kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialect {
    name: String,
    kinds: BTreeSet<String>,
}

impl Dialect {
    /// Define a dialect from its name and the kinds it provides.
    pub fn new<K, I>(name: impl Into<String>, kinds: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        Dialect {
            name: name.into(),
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when `kind` (unqualified) is part of this dialect.
    pub fn defines(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }
}

/// Errors produced by dialect registration and module validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialectError {
    #[error("dialect name cannot be empty")]
    EmptyName,
    #[error("dialect `{0}` is already registered with a different definition")]
    DuplicateDialect(String),
    #[error("operation `{kind}` does not belong to a registered dialect")]
    UnknownDialectNode { kind: String },
}

/// Set of dialects registered with a context.
#[derive(Clone, Debug, Default)]
pub struct DialectRegistry {
    dialects: BTreeMap<String, Dialect>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dialect. Re-registering an identical definition is a no-op.
    pub fn register(&mut self, dialect: Dialect) -> Result<(), DialectError> {
        if dialect.name.is_empty() {
            return Err(DialectError::EmptyName);
        }
        match self.dialects.get(&dialect.name) {
            Some(existing) if *existing == dialect => {
                debug!("dialect {} already registered", dialect.name);
                Ok(())
            }
            Some(_) => Err(DialectError::DuplicateDialect(dialect.name)),
            None => {
                debug!(
                    "registered dialect {} ({} kinds)",
                    dialect.name,
                    dialect.kinds.len()
                );
                self.dialects.insert(dialect.name.clone(), dialect);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Dialect> {
        self.dialects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dialects.contains_key(name)
    }

    /// True when `op_name` is `<dialect>.<kind>` for a registered dialect
    /// that defines `kind`.
    pub fn is_legal(&self, op_name: &str) -> bool {
        match op_name.split_once('.') {
            Some((dialect, kind)) => self
                .dialects
                .get(dialect)
                .map(|d| d.defines(kind))
                .unwrap_or(false),
            None => false,
        }
    }

    /// Registered dialect names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dialects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }
}
