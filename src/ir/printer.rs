// CLASSIFICATION: COMMUNITY
// Filename: printer.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Deterministic textual form of a module. The output is accepted by
//! [`crate::ir::parser::parse_module`] and parses back to an equal module.

use std::fmt::Write;

use crate::ir::operation::write_quoted;
use crate::ir::{Module, Operation};

const INDENT: &str = "  ";

/// Render `module` in the generic IR text format.
pub fn print_module(module: &Module) -> String {
    let mut out = String::new();
    out.push_str("module ");
    if let Some(name) = &module.name {
        out.push('@');
        write_name(&mut out, name);
        out.push(' ');
    }
    out.push_str("{\n");
    for op in &module.ops {
        print_op(&mut out, op, 1);
    }
    out.push_str("}\n");
    out
}

fn print_op(out: &mut String, op: &Operation, depth: usize) {
    push_indent(out, depth);
    out.push_str(&op.name);
    if !op.attributes.is_empty() {
        out.push_str(" {");
        for (i, (key, value)) in op.attributes.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_name(out, key);
            // String never fails to accept writes.
            let _ = write!(out, " = {value}");
        }
        out.push('}');
    }
    if !op.region.is_empty() {
        out.push_str(" (\n");
        for child in &op.region {
            print_op(out, child, depth + 1);
        }
        push_indent(out, depth);
        out.push(')');
    }
    out.push('\n');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Identifiers print bare; anything the lexer would not read back as an
/// identifier is quoted.
fn write_name(out: &mut String, name: &str) {
    if is_identifier(name) {
        out.push_str(name);
    } else {
        let _ = write_quoted(out, name);
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | '-')
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => chars.all(is_ident_continue),
        _ => false,
    }
}
