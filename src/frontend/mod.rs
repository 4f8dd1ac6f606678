// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Frontend registry: maps a source-format tag to the parser that turns
//! raw input into a [`Module`].

pub mod generic;
pub mod toy;

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use crate::ir::{Context, DialectError, Module, SyntaxError};

/// Something that can turn source text into a module.
pub trait Frontend: Send + Sync {
    fn parse(&self, source: &str) -> Result<Module, SyntaxError>;
}

impl<F> Frontend for F
where
    F: Fn(&str) -> Result<Module, SyntaxError> + Send + Sync,
{
    fn parse(&self, source: &str) -> Result<Module, SyntaxError> {
        self(source)
    }
}

/// Errors raised while turning input into a validated module.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("no frontend registered for format `{0}`")]
    UnknownFrontend(String),
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Dialect(#[from] DialectError),
}

/// Tag -> parser table. Several tags may share one parser.
#[derive(Clone, Default)]
pub struct FrontendRegistry {
    frontends: BTreeMap<String, Arc<dyn Frontend>>,
}

impl FrontendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in generic IR and toy frontends.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let generic: Arc<dyn Frontend> = Arc::new(generic::GenericFrontend);
        registry.register_shared("ir", Arc::clone(&generic));
        registry.register_shared("mlir", generic);
        let toy: Arc<dyn Frontend> = Arc::new(toy::ToyFrontend);
        registry.register_shared("toy", Arc::clone(&toy));
        registry.register_shared("txt", toy);
        registry
    }

    /// Associate `tag` with a parser. An existing association is replaced.
    pub fn register(&mut self, tag: impl Into<String>, frontend: impl Frontend + 'static) {
        self.register_shared(tag, Arc::new(frontend));
    }

    /// Like [`register`](Self::register) for a parser shared between tags.
    pub fn register_shared(&mut self, tag: impl Into<String>, frontend: Arc<dyn Frontend>) {
        let tag = tag.into();
        if self.frontends.insert(tag.clone(), frontend).is_some() {
            debug!("frontend for `{tag}` replaced");
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.frontends.contains_key(tag)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.frontends.keys().map(String::as_str)
    }

    pub fn resolve(&self, tag: &str) -> Result<Arc<dyn Frontend>, FrontendError> {
        self.frontends
            .get(tag)
            .cloned()
            .ok_or_else(|| FrontendError::UnknownFrontend(tag.to_string()))
    }

    /// Resolve `tag`, read all of `input`, parse it and validate the result
    /// against the context's dialects. Nothing is read for an unknown tag.
    pub fn parse<R: Read>(
        &self,
        ctx: &Context,
        tag: &str,
        mut input: R,
    ) -> Result<Module, FrontendError> {
        let frontend = self.resolve(tag)?;
        let mut source = String::new();
        input.read_to_string(&mut source)?;
        Self::finish(ctx, tag, frontend.as_ref(), &source)
    }

    /// Same as [`parse`](Self::parse) for text that is already in memory.
    pub fn parse_str(&self, ctx: &Context, tag: &str, source: &str) -> Result<Module, FrontendError> {
        let frontend = self.resolve(tag)?;
        Self::finish(ctx, tag, frontend.as_ref(), source)
    }

    fn finish(
        ctx: &Context,
        tag: &str,
        frontend: &dyn Frontend,
        source: &str,
    ) -> Result<Module, FrontendError> {
        let module = frontend.parse(source)?;
        ctx.validate(&module)?;
        info!(
            "parsed {} operation(s) with frontend `{tag}`",
            module.op_count()
        );
        Ok(module)
    }
}

impl fmt::Debug for FrontendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.frontends.keys()).finish()
    }
}

/// Format tag implied by a file extension (`prog.toy` -> `toy`).
pub fn infer_tag(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}
