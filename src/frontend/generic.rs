// CLASSIFICATION: COMMUNITY
// Filename: generic.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Frontend for the generic IR text format produced by the `ir` target.

use crate::frontend::Frontend;
use crate::ir::{parse_module, Module, SyntaxError};

/// Parses any dialect written in generic form.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericFrontend;

impl Frontend for GenericFrontend {
    fn parse(&self, source: &str) -> Result<Module, SyntaxError> {
        parse_module(source)
    }
}
