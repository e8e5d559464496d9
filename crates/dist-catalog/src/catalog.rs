//! Registry of named distributions and their truncation sets

use crate::spec::{DistributionSpec, Evaluators};
use crate::traits::Kind;
use crate::truncation::TruncationSet;
use dist_core::{Error, Result};
use std::collections::BTreeMap;
use tracing::trace;

#[derive(Debug, Clone)]
struct CatalogEntry {
    spec: DistributionSpec,
    truncation: TruncationSet,
}

/// Name-keyed table of distributions
///
/// Entries iterate in name order. The catalogue is meant to be built once
/// and then only read; it is `Send + Sync` and shares freely across
/// threads without locking.
#[derive(Debug, Clone, Default)]
pub struct DistributionCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl DistributionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`
    ///
    /// `kind` and `parameters` must match what the evaluators report.
    ///
    /// Overwriting replaces the whole entry, including any truncation set
    /// declared for the old one.
    pub fn register(
        &mut self,
        name: &str,
        kind: Kind,
        parameters: Vec<f64>,
        evaluators: Evaluators,
    ) -> Result<()> {
        let spec = DistributionSpec::new(name, kind, parameters, evaluators)?;
        self.insert(spec);
        Ok(())
    }

    /// Insert or overwrite an already-built spec under its own name
    pub fn insert(&mut self, spec: DistributionSpec) {
        trace!("Registering '{}' ({})", spec.name(), spec.kind());
        self.entries.insert(
            spec.name().to_string(),
            CatalogEntry {
                spec,
                truncation: TruncationSet::default(),
            },
        );
    }

    /// Attach a truncation set to a registered distribution
    pub fn declare_truncation(&mut self, name: &str, truncation: TruncationSet) -> Result<()> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| Error::not_found("distribution", name))?;
        entry.truncation = truncation;
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&DistributionSpec> {
        self.entries
            .get(name)
            .map(|e| &e.spec)
            .ok_or_else(|| Error::not_found("distribution", name))
    }

    /// Truncation set of `name`; empty if none was declared
    pub fn truncation(&self, name: &str) -> Result<&TruncationSet> {
        self.entries
            .get(name)
            .map(|e| &e.truncation)
            .ok_or_else(|| Error::not_found("distribution", name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Specs paired with their truncation sets, in name order
    pub fn iter(&self) -> impl Iterator<Item = (&DistributionSpec, &TruncationSet)> {
        self.entries.values().map(|e| (&e.spec, &e.truncation))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
