//! Element-wise comparison of vectors from two implementations
//!
//! The comparator makes no pass/fail judgement. It returns the raw
//! discrepancy series; what tolerance is acceptable depends on how well
//! conditioned each function is, so that decision is left to the caller.

use crate::cases::ReferenceCase;
use crate::store::VectorStore;
use dist_core::{Error, NumericVector, Result};
use tracing::{debug, instrument, warn};

/// `local - reference`, element by element
///
/// Lengths must match. When both vectors carry a grid descriptor the grids
/// must match too; a vector without one (as loaded from text) is assumed to
/// be on the other's grid. Non-finite entries propagate as IEEE arithmetic
/// dictates, so `inf - inf` is NaN.
pub fn compare_vectors(
    local: &NumericVector,
    reference: &NumericVector,
    name: &str,
) -> Result<NumericVector> {
    if local.len() != reference.len() {
        return Err(Error::length_mismatch(
            local.len(),
            reference.len(),
            &format!("'{name}'"),
        ));
    }
    if let (Some(a), Some(b)) = (local.grid(), reference.grid()) {
        if a != b {
            return Err(Error::Schema(format!(
                "Grid mismatch in '{name}': {a} vs {b}"
            )));
        }
    }

    let values = local
        .iter()
        .zip(reference.iter())
        .map(|(a, b)| a - b)
        .collect();
    Ok(match local.grid().or(reference.grid()) {
        Some(grid) => NumericVector::new(values, grid.clone()),
        None => NumericVector::from_values(values),
    })
}

/// Joins two stores by vector name
pub struct CrossImplementationComparator<'a> {
    local: &'a dyn VectorStore,
    reference: &'a dyn VectorStore,
}

impl<'a> CrossImplementationComparator<'a> {
    /// `local` holds this system's vectors, `reference` the other
    /// implementation's
    pub fn new(local: &'a dyn VectorStore, reference: &'a dyn VectorStore) -> Self {
        Self { local, reference }
    }

    /// Discrepancy series for one vector name
    #[instrument(level = "debug", skip(self))]
    pub fn compare(&self, name: &str) -> Result<NumericVector> {
        let local = self.local.load(name)?;
        let reference = self.reference.load(name)?;
        let diff = compare_vectors(&local, &reference, name)?;
        debug!("{}: max |diff| = {:?}", name, diff.max_abs());
        Ok(diff)
    }

    /// Compare each of `names`, one result per name
    pub fn compare_names<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
    ) -> Vec<(String, Result<NumericVector>)> {
        names
            .into_iter()
            .map(|name| {
                let result = self.compare(name);
                if let Err(e) = &result {
                    warn!("{}: {}", name, e);
                }
                (name.to_string(), result)
            })
            .collect()
    }

    /// Compare the vector of every case, one result per case
    ///
    /// A case missing from either store is reported as `NotFound`; files
    /// that belong to no case are ignored.
    #[instrument(level = "debug", skip_all, fields(cases = cases.len()))]
    pub fn compare_all(&self, cases: &[ReferenceCase]) -> Vec<(String, Result<NumericVector>)> {
        let names: Vec<String> = cases.iter().map(ReferenceCase::file_name).collect();
        self.compare_names(names.iter().map(String::as_str))
    }
}
