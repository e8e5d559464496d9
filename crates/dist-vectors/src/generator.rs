//! Evaluation of catalogue functions on deterministic grids

use crate::cases::{FunctionKind, ReferenceCase};
use crate::store::VectorStore;
use dist_catalog::DistributionSpec;
use dist_core::{Grid, NumericVector, Result};
use tracing::{debug, instrument};

/// Produces reference vectors
///
/// Output depends only on the spec and the grid: the same inputs give a
/// bit-identical vector on every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceVectorGenerator;

impl ReferenceVectorGenerator {
    pub fn new() -> Self {
        Self
    }

    fn evaluate(&self, grid: &Grid, f: impl Fn(f64) -> f64) -> NumericVector {
        let values = grid.values().into_iter().map(f).collect();
        NumericVector::new(values, grid.clone())
    }

    /// Quantile function at each probability of `grid`
    pub fn generate_quantiles(&self, spec: &DistributionSpec, grid: &Grid) -> NumericVector {
        self.evaluate(grid, |p| spec.quantile(p))
    }

    /// CDF at each point of `grid`
    pub fn generate_cdf(&self, spec: &DistributionSpec, grid: &Grid) -> NumericVector {
        self.evaluate(grid, |x| spec.cdf(x))
    }

    /// PDF or PMF at each point of `grid`
    pub fn generate_pdf(&self, spec: &DistributionSpec, grid: &Grid) -> NumericVector {
        self.evaluate(grid, |x| spec.density(x))
    }

    #[instrument(level = "debug", skip_all, fields(case = case.name(), grid = %case.grid()))]
    pub fn generate(&self, case: &ReferenceCase) -> NumericVector {
        match case.function() {
            FunctionKind::Quantile => self.generate_quantiles(case.spec(), case.grid()),
            FunctionKind::Cdf => self.generate_cdf(case.spec(), case.grid()),
            FunctionKind::Density => self.generate_pdf(case.spec(), case.grid()),
        }
    }

    /// Generate every case and save it under its file name
    ///
    /// Returns the names written, in case order. Stops at the first
    /// store failure.
    #[instrument(level = "debug", skip_all, fields(cases = cases.len()))]
    pub fn generate_all<S: VectorStore + ?Sized>(
        &self,
        cases: &[ReferenceCase],
        store: &mut S,
    ) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(cases.len());
        for case in cases {
            let name = case.file_name();
            let vector = self.generate(case);
            store.save(&name, &vector)?;
            debug!("Wrote {} ({} values)", name, vector.len());
            written.push(name);
        }
        Ok(written)
    }
}
