// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v2.0
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Intermediate Representation (IR) root module.
//! Re-exports operations, modules, dialects, the context and the text format.

pub mod context;
pub mod dialect;
pub mod module;
pub mod operation;
pub mod parser;
pub mod printer;

pub use context::Context;
pub use dialect::{Dialect, DialectError, DialectRegistry};
pub use module::Module;
pub use operation::{Attribute, Operation};
pub use parser::{parse_module, SyntaxError};
pub use printer::print_module;
