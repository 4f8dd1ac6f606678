// CLASSIFICATION: COMMUNITY
// Filename: parser.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Parser for the generic IR text format, driven by the pest grammar in
//! `ir/ir.pest`.
//!
//! ```text
//! module @name {
//!   toy.lit {value = 5}
//!   toy.add (
//!     toy.lit {value = 1}
//!     toy.lit {value = 2}
//!   )
//! }
//! ```
//!
//! The `module` wrapper is optional; a bare list of operations forms an
//! anonymous module.

use std::collections::BTreeMap;

use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

use crate::ir::{Attribute, Module, Operation};

#[derive(Parser)]
#[grammar = "ir/ir.pest"]
struct IrParser;

/// Deepest region nesting accepted.
pub const MAX_NESTING: usize = 256;

/// Parse failure with a 1-based source position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("syntax error at {line}:{column}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl SyntaxError {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        SyntaxError {
            line,
            column,
            message: message.into(),
        }
    }

    fn at(pair: &Pair<'_, Rule>, message: impl Into<String>) -> Self {
        let (line, column) = pair.as_span().start_pos().line_col();
        SyntaxError::new(line, column, message)
    }
}

impl From<pest::error::Error<Rule>> for SyntaxError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        let err = err.renamed_rules(describe_rule);
        let (line, column) = match err.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };
        SyntaxError::new(line, column, err.variant.message().to_string())
    }
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::EOI => "end of input".into(),
        Rule::ident => "identifier".into(),
        Rule::string | Rule::string_raw => "string literal".into(),
        Rule::integer => "integer literal".into(),
        Rule::boolean => "boolean".into(),
        Rule::attribute => "attribute".into(),
        Rule::attr_dict => "attribute dictionary".into(),
        Rule::region => "region".into(),
        Rule::operation => "operation".into(),
        Rule::symbol => "`@` symbol".into(),
        Rule::kw_module | Rule::module_decl | Rule::module => "module".into(),
        other => format!("{other:?}"),
    }
}

/// Parse a complete module from generic IR text.
pub fn parse_module(source: &str) -> Result<Module, SyntaxError> {
    check_nesting(source)?;
    let mut module = Module::new();
    let Some(root) = IrParser::parse(Rule::module, source)?.next() else {
        return Ok(module);
    };
    for pair in root.into_inner() {
        match pair.as_rule() {
            Rule::module_decl => {
                for inner in pair.into_inner() {
                    match inner.as_rule() {
                        Rule::symbol => module.name = Some(symbol_name(inner)),
                        Rule::operation => module.ops.push(build_operation(inner)?),
                        _ => {}
                    }
                }
            }
            Rule::operation => module.ops.push(build_operation(pair)?),
            _ => {}
        }
    }
    Ok(module)
}

/// Reject regions nested deeper than [`MAX_NESTING`] before the recursive
/// grammar sees them. Parentheses inside strings and comments are ignored.
fn check_nesting(source: &str) -> Result<(), SyntaxError> {
    let (mut depth, mut line, mut column) = (0usize, 1usize, 1usize);
    let (mut in_string, mut in_comment, mut escaped) = (false, false, false);
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        let (at_line, at_column) = (line, column);
        if c == '\n' {
            line += 1;
            column = 1;
            in_comment = false;
        } else {
            column += 1;
        }
        if in_comment {
            continue;
        }
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '/' if chars.peek() == Some(&'/') => in_comment = true,
            '(' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(SyntaxError::new(at_line, at_column, "nesting too deep"));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn build_operation(pair: Pair<'_, Rule>) -> Result<Operation, SyntaxError> {
    let mut inner = pair.into_inner();
    let name = inner.next().map(|p| p.as_str()).unwrap_or_default();
    let mut op = Operation::new(name);
    for part in inner {
        match part.as_rule() {
            Rule::attr_dict => op.attributes = build_attributes(part)?,
            Rule::region => {
                for child in part.into_inner() {
                    op.region.push(build_operation(child)?);
                }
            }
            _ => {}
        }
    }
    Ok(op)
}

fn build_attributes(pair: Pair<'_, Rule>) -> Result<BTreeMap<String, Attribute>, SyntaxError> {
    let mut attrs = BTreeMap::new();
    for attribute in pair.into_inner() {
        let at = attribute.clone();
        let mut inner = attribute.into_inner();
        let (Some(key), Some(value)) = (inner.next(), inner.next()) else {
            return Err(SyntaxError::at(&at, "malformed attribute"));
        };
        let key = match key.as_rule() {
            Rule::string => string_value(key),
            _ => key.as_str().to_owned(),
        };
        let value = match value.as_rule() {
            Rule::integer => value
                .as_str()
                .parse::<i64>()
                .map(Attribute::Int)
                .map_err(|_| SyntaxError::at(&value, "integer literal out of range"))?,
            Rule::boolean => Attribute::Bool(value.as_str() == "true"),
            _ => Attribute::Str(string_value(value)),
        };
        if attrs.contains_key(&key) {
            return Err(SyntaxError::at(&at, format!("duplicate attribute `{key}`")));
        }
        attrs.insert(key, value);
    }
    Ok(attrs)
}

fn symbol_name(pair: Pair<'_, Rule>) -> String {
    match pair.into_inner().next() {
        Some(p) if p.as_rule() == Rule::string => string_value(p),
        Some(p) => p.as_str().to_owned(),
        None => String::new(),
    }
}

/// Decoded contents of a `string` pair. The grammar only admits the
/// escapes handled here.
fn string_value(pair: Pair<'_, Rule>) -> String {
    let raw = pair.into_inner().next().map(|p| p.as_str()).unwrap_or_default();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
