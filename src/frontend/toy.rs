// CLASSIFICATION: COMMUNITY
// Filename: toy.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! The `toy` dialect and its literal-list frontend.
//!
//! Source is a whitespace separated list of integer literals; `#` starts a
//! comment running to the end of the line. Each literal becomes a
//! `toy.lit {value = n}` operation.

use pest::Parser;
use pest_derive::Parser;

use crate::frontend::Frontend;
use crate::ir::{Dialect, Module, Operation, SyntaxError};

pub const DIALECT: &str = "toy";
pub const LIT: &str = "toy.lit";
pub const ADD: &str = "toy.add";
pub const MUL: &str = "toy.mul";
pub const NOP: &str = "toy.nop";
pub const BLOCK: &str = "toy.block";
pub const PRINT: &str = "toy.print";

/// Attribute holding a literal's value.
pub const VALUE: &str = "value";

#[derive(Parser)]
#[grammar = "frontend/toy.pest"]
struct ToyGrammar;

/// Node kinds of the `toy` dialect.
pub fn dialect() -> Dialect {
    Dialect::new(DIALECT, ["lit", "add", "mul", "nop", "block", "print"])
}

/// `toy.lit {value = n}`
pub fn lit(value: i64) -> Operation {
    Operation::new(LIT).with_attr(VALUE, value)
}

/// Literal-list parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToyFrontend;

impl Frontend for ToyFrontend {
    fn parse(&self, source: &str) -> Result<Module, SyntaxError> {
        let program = ToyGrammar::parse(Rule::program, source).map_err(|err| {
            let (line, column) = match err.line_col {
                pest::error::LineColLocation::Pos((l, c)) => (l, c),
                pest::error::LineColLocation::Span((l, c), _) => (l, c),
            };
            SyntaxError::new(line, column, err.variant.message().to_string())
        })?;
        let mut module = Module::new();
        for word in program.flatten().filter(|p| p.as_rule() == Rule::word) {
            let text = word.as_str();
            let value = text.parse::<i64>().map_err(|_| {
                let (line, column) = word.as_span().start_pos().line_col();
                SyntaxError::new(
                    line,
                    column,
                    format!("expected integer literal, found `{text}`"),
                )
            })?;
            module.push(lit(value));
        }
        Ok(module)
    }
}
