// CLASSIFICATION: COMMUNITY
// Filename: registry.rs v2.0
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Pass registry: a name -> pass table built once from a native and an
//! integrated pass list and read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use thiserror::Error;

use super::traits::{pass_name, Pass};

/// Pipeline token expanding to every registered pass.
pub const SELECT_ALL: &str = "all";
/// Pipeline token expanding to every native pass.
pub const SELECT_NATIVE: &str = "all-native";
/// Pipeline token expanding to every integrated pass.
pub const SELECT_INTEGRATED: &str = "all-integrated";

/// Where a pass comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Built into the framework.
    Native,
    /// Supplied by the toy-language toolchain.
    Integrated,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provenance::Native => "native",
            Provenance::Integrated => "integrated",
        })
    }
}

/// Which provenance classes a listing or selector covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassFilter {
    #[default]
    All,
    Native,
    Integrated,
}

impl PassFilter {
    pub fn admits(self, provenance: Provenance) -> bool {
        match self {
            PassFilter::All => true,
            PassFilter::Native => provenance == Provenance::Native,
            PassFilter::Integrated => provenance == Provenance::Integrated,
        }
    }

    /// The filter a pipeline selector token stands for.
    pub fn from_selector(token: &str) -> Option<Self> {
        match token {
            SELECT_ALL => Some(PassFilter::All),
            SELECT_NATIVE => Some(PassFilter::Native),
            SELECT_INTEGRATED => Some(PassFilter::Integrated),
            _ => None,
        }
    }
}

impl FromStr for PassFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PassFilter::All),
            "native" => Ok(PassFilter::Native),
            "integrated" => Ok(PassFilter::Integrated),
            other => Err(format!(
                "unknown pass filter `{other}` (expected all, native or integrated)"
            )),
        }
    }
}

/// Integrity violations detected while building a registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("pass label `{0}` normalises to an empty name")]
    EmptyPassName(String),
    #[error("duplicate pass name `{0}`")]
    DuplicatePassName(String),
    #[error("pass name `{0}` is reserved for pipeline selectors")]
    ReservedPassName(String),
}

/// A pass together with its registered name and provenance.
#[derive(Clone)]
pub struct RegisteredPass {
    name: String,
    provenance: Provenance,
    pass: Arc<dyn Pass>,
}

impl RegisteredPass {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn pass(&self) -> &dyn Pass {
        self.pass.as_ref()
    }

    pub fn description(&self) -> &str {
        self.pass.description()
    }
}

impl fmt::Debug for RegisteredPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredPass")
            .field("name", &self.name)
            .field("provenance", &self.provenance)
            .finish()
    }
}

/// Name -> pass table. Entries keep registration order: native passes
/// first, then integrated ones, each in the order supplied.
#[derive(Clone, Default)]
pub struct PassRegistry {
    entries: Vec<RegisteredPass>,
    index: HashMap<String, usize>,
}

impl PassRegistry {
    /// Build a registry from the two pass lists.
    pub fn build(
        native: Vec<Arc<dyn Pass>>,
        integrated: Vec<Arc<dyn Pass>>,
    ) -> Result<Self, RegistryError> {
        let mut registry = PassRegistry::default();
        let tagged = native
            .into_iter()
            .map(|p| (Provenance::Native, p))
            .chain(integrated.into_iter().map(|p| (Provenance::Integrated, p)));
        for (provenance, pass) in tagged {
            registry.insert(provenance, pass)?;
        }
        debug!("pass registry built with {} passes", registry.len());
        Ok(registry)
    }

    fn insert(&mut self, provenance: Provenance, pass: Arc<dyn Pass>) -> Result<(), RegistryError> {
        let name = pass_name(pass.label());
        if name.is_empty() {
            return Err(RegistryError::EmptyPassName(pass.label().to_string()));
        }
        if PassFilter::from_selector(&name).is_some() {
            return Err(RegistryError::ReservedPassName(name));
        }
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicatePassName(name));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(RegisteredPass {
            name,
            provenance,
            pass,
        });
        Ok(())
    }

    /// Look a pass up by its registered name.
    pub fn lookup(&self, name: &str) -> Option<&RegisteredPass> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Registered entries matching `filter`, in registration order.
    pub fn entries(&self, filter: PassFilter) -> impl Iterator<Item = &RegisteredPass> + Clone + '_ {
        self.entries
            .iter()
            .filter(move |e| filter.admits(e.provenance))
    }

    /// Registered names matching `filter`, in registration order. The
    /// iterator is lazy and can be cloned to restart the listing.
    pub fn names(&self, filter: PassFilter) -> impl Iterator<Item = &str> + Clone + '_ {
        self.entries(filter).map(RegisteredPass::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

/// Incremental construction of a [`PassRegistry`].
#[derive(Default)]
pub struct PassRegistryBuilder {
    native: Vec<Arc<dyn Pass>>,
    integrated: Vec<Arc<dyn Pass>>,
}

impl PassRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a framework-native pass.
    pub fn native<P: Pass + 'static>(mut self, pass: P) -> Self {
        self.native.push(Arc::new(pass));
        self
    }

    /// Queue a toolchain-integrated pass.
    pub fn integrated<P: Pass + 'static>(mut self, pass: P) -> Self {
        self.integrated.push(Arc::new(pass));
        self
    }

    pub fn build(self) -> Result<PassRegistry, RegistryError> {
        PassRegistry::build(self.native, self.integrated)
    }
}
