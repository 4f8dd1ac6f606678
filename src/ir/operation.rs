// CLASSIFICATION: COMMUNITY
// Filename: operation.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Generic IR operation: a dialect-qualified name, an attribute dictionary
//! and a nested region of child operations.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Constant value attached to an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Attribute {
    /// Integer payload, if this is an integer attribute.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Attribute::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// String payload, if this is a string attribute.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Attribute::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Attribute {
    fn from(v: i64) -> Self {
        Attribute::Int(v)
    }
}

impl From<bool> for Attribute {
    fn from(v: bool) -> Self {
        Attribute::Bool(v)
    }
}

impl From<&str> for Attribute {
    fn from(v: &str) -> Self {
        Attribute::Str(v.to_string())
    }
}

impl From<String> for Attribute {
    fn from(v: String) -> Self {
        Attribute::Str(v)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Bool(b) => write!(f, "{b}"),
            Attribute::Int(v) => write!(f, "{v}"),
            Attribute::Str(s) => write_quoted(f, s),
        }
    }
}

/// Write `s` as a double-quoted string literal understood by the IR parser.
pub(crate) fn write_quoted(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}

/// A single IR node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Fully qualified name, `<dialect>.<kind>`.
    pub name: String,
    /// Attribute dictionary, ordered by key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Attribute>,
    /// Child operations, in program order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub region: Vec<Operation>,
}

impl Operation {
    /// Create an operation with no attributes and an empty region.
    pub fn new(name: impl Into<String>) -> Self {
        Operation {
            name: name.into(),
            attributes: BTreeMap::new(),
            region: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Attribute>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder-style region append.
    pub fn with_child(mut self, child: Operation) -> Self {
        self.region.push(child);
        self
    }

    pub fn attr(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Attribute>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<Attribute> {
        self.attributes.remove(key)
    }

    /// Dialect prefix of the name; empty when the name is unqualified.
    pub fn dialect(&self) -> &str {
        self.name.split_once('.').map(|(d, _)| d).unwrap_or("")
    }

    /// Node kind within the dialect.
    pub fn kind(&self) -> &str {
        self.name
            .split_once('.')
            .map(|(_, k)| k)
            .unwrap_or(&self.name)
    }

    /// True when this operation has the given fully qualified name.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Visit this operation and all nested operations in pre-order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Operation)) {
        f(self);
        for child in &self.region {
            child.walk(f);
        }
    }

    /// Pre-order visit that stops at the first error.
    pub fn try_walk<E>(&self, f: &mut impl FnMut(&Operation) -> Result<(), E>) -> Result<(), E> {
        f(self)?;
        for child in &self.region {
            child.try_walk(f)?;
        }
        Ok(())
    }

    /// Mutable pre-order visit that stops at the first error.
    pub fn try_walk_mut<E>(
        &mut self,
        f: &mut impl FnMut(&mut Operation) -> Result<(), E>,
    ) -> Result<(), E> {
        f(self)?;
        for child in &mut self.region {
            child.try_walk_mut(f)?;
        }
        Ok(())
    }
}
