//! Renormalization of densities over a union of truncation intervals
//!
//! A constrained sampler only ever produces values inside its truncation
//! intervals, so to compare its output with the unconstrained density that
//! density has to be rescaled by the mass the intervals cover. The mass is
//! estimated per interval and summed:
//!
//! - **Continuous**: `N` evenly spaced points across `[lo, hi]` (both ends
//!   included) give `width × mean(pdf)`. Fixed grid, no adaptivity.
//! - **Discrete**: the integers in `[lo, hi]` give `width × mean(pmf)`.
//!   This is an average-density estimate on the histogram scale the
//!   sample plots use, not the exact sum of the PMF. A single-point
//!   interval therefore contributes nothing.
//! - **Mass tables**: the exact sum of the table entries inside the
//!   intervals.
//!
//! The rescaled density inside the union is `density(x) / mass` and zero
//! outside it.

use crate::catalog::DistributionCatalog;
use crate::spec::DistributionSpec;
use crate::traits::Kind;
use crate::truncation::{Interval, TruncationSet};
use dist_core::{Error, Grid, NumericVector, Result};
use tracing::{debug, instrument, warn};

/// Default number of grid points per continuous interval
pub const DEFAULT_CONTINUOUS_POINTS: usize = 1000;

/// Widest discrete interval the engine will walk point by point
pub const MAX_DISCRETE_POINTS: usize = 10_000_000;

/// Parameters for mass estimation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenormalizationParameters {
    /// Grid points per continuous interval, endpoints included
    pub continuous_points: usize,
}

impl Default for RenormalizationParameters {
    fn default() -> Self {
        Self {
            continuous_points: DEFAULT_CONTINUOUS_POINTS,
        }
    }
}

/// Mass attributed to one interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalMass {
    pub interval: Interval,
    pub mass: f64,
}

/// Per-interval and total mass of a truncation set
#[derive(Debug, Clone, PartialEq)]
pub struct MassReport {
    pub name: String,
    pub intervals: Vec<IntervalMass>,
    pub total: f64,
}

impl MassReport {
    /// Intervals that contributed no mass
    pub fn degenerate(&self) -> impl Iterator<Item = &IntervalMass> {
        self.intervals.iter().filter(|m| m.mass == 0.0)
    }
}

/// A density rescaled to integrate (or sum) to one over a truncation set
#[derive(Debug, Clone)]
pub struct RenormalizedDensity {
    spec: DistributionSpec,
    truncation: TruncationSet,
    report: MassReport,
}

impl RenormalizedDensity {
    pub fn spec(&self) -> &DistributionSpec {
        &self.spec
    }

    pub fn truncation(&self) -> &TruncationSet {
        &self.truncation
    }

    pub fn report(&self) -> &MassReport {
        &self.report
    }

    /// The divisor applied to the unconstrained density
    pub fn mass(&self) -> f64 {
        self.report.total
    }

    /// Rescaled density at `x`; zero outside the truncation set
    pub fn density(&self, x: f64) -> f64 {
        if self.truncation.contains(x) {
            self.spec.density(x) / self.report.total
        } else {
            0.0
        }
    }

    /// Rescaled density at each raw sample value
    pub fn evaluate(&self, samples: &[f64]) -> NumericVector {
        let values = samples.iter().map(|&x| self.density(x)).collect();
        NumericVector::new(values, Grid::points(samples.to_vec()))
    }
}

/// Estimates truncation-set mass and builds renormalized densities
#[derive(Debug, Clone)]
pub struct RenormalizationEngine {
    params: RenormalizationParameters,
}

impl Default for RenormalizationEngine {
    fn default() -> Self {
        Self {
            params: RenormalizationParameters::default(),
        }
    }
}

impl RenormalizationEngine {
    pub fn new(params: RenormalizationParameters) -> Result<Self> {
        if params.continuous_points < 2 {
            return Err(Error::Configuration(format!(
                "continuous_points must be at least 2, got {}",
                params.continuous_points
            )));
        }
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &RenormalizationParameters {
        &self.params
    }

    /// Mass one interval contributes under `spec`
    ///
    /// Discrete intervals wider than [`MAX_DISCRETE_POINTS`] are a
    /// configuration error.
    pub fn interval_mass(&self, spec: &DistributionSpec, interval: &Interval) -> Result<f64> {
        if let Some(table) = spec.table() {
            return Ok(table.mass_between(interval.lo(), interval.hi()));
        }
        if interval.is_degenerate() {
            return Ok(0.0);
        }
        let mass = match spec.kind() {
            Kind::Discrete => {
                if interval.width() > MAX_DISCRETE_POINTS as f64 {
                    return Err(Error::Configuration(format!(
                        "Interval {interval} of '{}' spans more than {} integers",
                        spec.name(),
                        MAX_DISCRETE_POINTS
                    )));
                }
                let (sum, count) = interval
                    .integer_points()
                    .fold((0.0, 0usize), |(sum, count), k| {
                        (sum + spec.density(k as f64), count + 1)
                    });
                if count == 0 {
                    0.0
                } else {
                    interval.width() * sum / count as f64
                }
            }
            Kind::Continuous => {
                let n = self.params.continuous_points;
                let points = Grid::linspace(interval.lo(), interval.hi(), n).values();
                let sum: f64 = points.iter().map(|&x| spec.density(x)).sum();
                interval.width() * sum / n as f64
            }
        };
        Ok(mass)
    }

    /// Per-interval and total mass of `truncation` under `spec`
    ///
    /// Fails when the set is empty or the total is not strictly positive.
    #[instrument(level = "debug", skip_all, fields(name = spec.name()))]
    pub fn mass(&self, spec: &DistributionSpec, truncation: &TruncationSet) -> Result<MassReport> {
        if truncation.is_empty() {
            return Err(Error::empty_truncation(spec.name()));
        }

        let intervals = truncation
            .intervals()
            .iter()
            .map(|interval| {
                Ok(IntervalMass {
                    interval: *interval,
                    mass: self.interval_mass(spec, interval)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let total: f64 = intervals.iter().map(|m| m.mass).sum();

        let report = MassReport {
            name: spec.name().to_string(),
            intervals,
            total,
        };
        for m in report.degenerate() {
            debug!("{}: interval {} contributes no mass", spec.name(), m.interval);
        }
        // Also catches NaN
        if !(total > 0.0) || !total.is_finite() {
            warn!("{}: truncation mass {} is not usable", spec.name(), total);
            return Err(Error::non_positive_mass(spec.name(), total));
        }
        debug!("{} scaling factor: {}", spec.name(), total);
        Ok(report)
    }

    /// Rescale `spec` over `truncation`
    pub fn renormalize(
        &self,
        spec: &DistributionSpec,
        truncation: &TruncationSet,
    ) -> Result<RenormalizedDensity> {
        let report = self.mass(spec, truncation)?;
        Ok(RenormalizedDensity {
            spec: spec.clone(),
            truncation: truncation.clone(),
            report,
        })
    }

    /// Rescale a catalogue entry over its declared truncation set
    pub fn renormalize_named(
        &self,
        catalog: &DistributionCatalog,
        name: &str,
    ) -> Result<RenormalizedDensity> {
        let spec = catalog.lookup(name)?;
        let truncation = catalog.truncation(name)?;
        self.renormalize(spec, truncation)
    }

    /// Mass report for every catalogue entry
    ///
    /// Each entry gets its own result; a failing distribution does not
    /// stop the others.
    pub fn renormalize_all(
        &self,
        catalog: &DistributionCatalog,
    ) -> Vec<(String, Result<MassReport>)> {
        catalog
            .iter()
            .map(|(spec, truncation)| (spec.name().to_string(), self.mass(spec, truncation)))
            .collect()
    }
}
