// CLASSIFICATION: COMMUNITY
// Filename: traits.rs v2.0
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Defines the core pass trait and the rule that turns a pass's identifying
//! label into its externally visible name.

use std::any::type_name;

use thiserror::Error;

use crate::ir::{Context, DialectError, Module};

/// Failure reported by a pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PassError {
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Dialect(#[from] DialectError),
}

impl PassError {
    pub fn failed(msg: impl Into<String>) -> Self {
        PassError::Failed(msg.into())
    }
}

/// Trait for any IR pass that transforms or analyzes a module.
pub trait Pass: Send + Sync {
    /// Label the external pass name is derived from. Defaults to the
    /// implementing type's name, so `DoubleLiteral` registers as
    /// `double-literal`.
    fn label(&self) -> &str {
        short_type_name(type_name::<Self>())
    }

    /// A short description of what this pass does.
    fn description(&self) -> &str {
        "(undocumented pass)"
    }

    /// Transform `module` in place. On error the module is left in whatever
    /// state the pass reached.
    fn run(&self, ctx: &Context, module: &mut Module) -> Result<(), PassError>;
}

/// `crate::passes::DoubleLiteral<T>` -> `DoubleLiteral`
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Normalise a label into a pass name.
///
/// Words are split at `_`, `-` and whitespace and at CamelCase boundaries
/// (`SSAPass` splits as `SSA` + `Pass`), lowercased and joined by single
/// hyphens. Leading and trailing separators are dropped. The function is
/// idempotent: a normalised name maps to itself.
pub fn pass_name(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    let mut out = String::with_capacity(label.len() + 4);
    let mut pending_sep = false;
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            pending_sep = true;
            continue;
        }
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let camel = c.is_uppercase()
            && match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.map_or(false, char::is_lowercase),
                _ => false,
            };
        if (pending_sep || camel) && !out.is_empty() {
            out.push('-');
        }
        pending_sep = false;
        out.extend(c.to_lowercase());
    }
    out
}
