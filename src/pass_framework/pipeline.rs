// CLASSIFICATION: COMMUNITY
// Filename: pipeline.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Pipeline builder: resolves requested pass names against a registry into
//! an ordered, immutable sequence of passes.

use log::debug;
use thiserror::Error;

use super::registry::{PassFilter, PassRegistry, RegisteredPass};
use super::traits::PassError;
use crate::ir::{Context, DialectError, Module};

/// Errors raised while building or executing a pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("unknown pass `{0}`")]
    UnknownPass(String),
    #[error("pass `{name}` (pipeline position {index}) failed: {source}")]
    PassExecution {
        name: String,
        index: usize,
        #[source]
        source: PassError,
    },
    #[error("module invalid after pass `{name}` (pipeline position {index}): {source}")]
    InvalidModuleAfterPass {
        name: String,
        index: usize,
        #[source]
        source: DialectError,
    },
}

impl PipelineError {
    /// Name and pipeline index of the pass an execution error is attributed to.
    pub fn failing_pass(&self) -> Option<(&str, usize)> {
        match self {
            PipelineError::UnknownPass(_) => None,
            PipelineError::PassExecution { name, index, .. }
            | PipelineError::InvalidModuleAfterPass { name, index, .. } => {
                Some((name.as_str(), *index))
            }
        }
    }
}

/// Ordered sequence of passes. Never reordered after construction.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    stages: Vec<RegisteredPass>,
}

impl Pipeline {
    /// The identity pipeline.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve `requested` in order. Selector tokens (`all`, `all-native`,
    /// `all-integrated`) are expanded first; the first unknown name aborts
    /// construction and no partial pipeline is returned. Blank entries are
    /// ignored.
    pub fn build<I, S>(registry: &PassRegistry, requested: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expanded: Vec<String> = Vec::new();
        for req in requested {
            let req = req.as_ref().trim();
            if req.is_empty() {
                continue;
            }
            match PassFilter::from_selector(req) {
                Some(filter) => expanded.extend(registry.names(filter).map(str::to_owned)),
                None => expanded.push(req.to_owned()),
            }
        }

        let stages = expanded
            .iter()
            .map(|name| {
                registry
                    .lookup(name)
                    .cloned()
                    .ok_or_else(|| PipelineError::UnknownPass(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("pipeline built: [{}]", expanded.join(", "));
        Ok(Pipeline { stages })
    }

    /// Build from a comma separated list such as `fold-constants,verify`.
    pub fn parse(registry: &PassRegistry, spec: &str) -> Result<Self, PipelineError> {
        Self::build(registry, spec.split(','))
    }

    pub fn stages(&self) -> &[RegisteredPass] {
        &self.stages
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(RegisteredPass::name)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every pass in order without per-pass verification.
    pub fn apply(&self, ctx: &Context, module: &mut Module) -> Result<(), PipelineError> {
        super::manager::execute(self, ctx, module, false, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass_framework::{Pass, PassRegistryBuilder};

    struct Named(&'static str);

    impl Pass for Named {
        fn label(&self) -> &str {
            self.0
        }

        fn run(&self, _ctx: &Context, _module: &mut Module) -> Result<(), PassError> {
            Ok(())
        }
    }

    fn registry() -> PassRegistry {
        PassRegistryBuilder::new()
            .native(Named("n1"))
            .native(Named("n2"))
            .integrated(Named("i1"))
            .build()
            .unwrap()
    }

    fn names(p: &Pipeline) -> Vec<&str> {
        p.names().collect()
    }

    #[test]
    fn preserves_request_order_and_duplicates() {
        let p = Pipeline::build(&registry(), ["i1", "n2", "i1"]).unwrap();
        assert_eq!(names(&p), vec!["i1", "n2", "i1"]);
    }

    #[test]
    fn empty_request_is_empty_pipeline() {
        let p = Pipeline::build(&registry(), Vec::<String>::new()).unwrap();
        assert!(p.is_empty());
        assert!(Pipeline::parse(&registry(), "").unwrap().is_empty());
    }

    #[test]
    fn first_unknown_name_fails_whole_build() {
        let err = Pipeline::build(&registry(), ["n1", "n2", "x", "y"]).unwrap_err();
        assert_eq!(err, PipelineError::UnknownPass("x".into()));
    }

    #[test]
    fn selectors_expand_in_registration_order() {
        let reg = registry();
        let p = Pipeline::parse(&reg, "i1, all-native").unwrap();
        assert_eq!(names(&p), vec!["i1", "n1", "n2"]);
        let p = Pipeline::parse(&reg, "all").unwrap();
        assert_eq!(names(&p), vec!["n1", "n2", "i1"]);
        let p = Pipeline::parse(&reg, "all-integrated,,").unwrap();
        assert_eq!(names(&p), vec!["i1"]);
    }

    #[test]
    fn selector_mixed_with_unknown_name_still_fails() {
        let err = Pipeline::parse(&registry(), "all-native,bogus").unwrap_err();
        assert_eq!(err, PipelineError::UnknownPass("bogus".into()));
    }
}
