//! Nemes' asymptotic approximation to the Gamma function
//!
//! The closed form
//!
//! ```text
//! Γ(z) ≈ (z/e)^z · sqrt(2π/z) · (1 + 1/(15z²))^(5z/4)
//! ```
//!
//! overflows an `f64` once `z` passes roughly 171, because `(z/e)^z` is
//! formed before anything is divided out. Taking logs term by term gives
//!
//! ```text
//! ln Γ(z) ≈ z(ln z − 1) + ½(ln 2π − ln z) + (5z/4)(ln(15z² + 1) − ln(15z²))
//! ```
//!
//! which never exponentiates and stays finite for any positive `z`. The two
//! forms are algebraically identical, so for arguments where the closed
//! form is still representable their difference is pure rounding error.

use dist_core::{linspace, Error, Grid, NumericVector, Result};
use std::f64::consts::{E, PI};
use tracing::{debug, instrument};

/// Default sweep used to check the two forms against each other
pub const DIVERGENCE_START: f64 = 0.001;
pub const DIVERGENCE_STOP: f64 = 100.0;
pub const DIVERGENCE_POINTS: usize = 1000;

fn check_domain(function: &str, z: f64) -> Result<()> {
    // Also rejects NaN
    if !(z > 0.0) || !z.is_finite() {
        return Err(Error::non_positive_argument(function, z));
    }
    Ok(())
}

/// Closed-form approximation of `Γ(z)` for `z > 0`
///
/// Returns `inf` once the leading power overflows; use [`log_domain`] for
/// large arguments.
pub fn closed_form(z: f64) -> Result<f64> {
    check_domain("closed_form", z)?;
    Ok(closed_form_unchecked(z))
}

#[inline]
fn closed_form_unchecked(z: f64) -> f64 {
    (z / E).powf(z) * (2.0 * PI / z).sqrt() * (1.0 + 1.0 / (15.0 * z * z)).powf(1.25 * z)
}

/// Approximation of `Γ(z)` that stays accurate near the pole at zero
///
/// Evaluates the closed form one step to the right and divides back down,
/// using `Γ(z) = Γ(z + 1) / z`.
pub fn shifted(z: f64) -> Result<f64> {
    check_domain("shifted", z)?;
    Ok(closed_form_unchecked(z + 1.0) / z)
}

/// `ln` of the closed form, computed without exponentiating
pub fn log_domain(z: f64) -> Result<f64> {
    check_domain("log_domain", z)?;
    Ok(log_domain_unchecked(z))
}

#[inline]
fn log_domain_unchecked(z: f64) -> f64 {
    let z2 = 15.0 * z * z;
    let mut acc = z * (z.ln() - 1.0);
    acc += 0.5 * ((2.0 * PI).ln() - z.ln());
    acc += 1.25 * z * ((z2 + 1.0).ln() - z2.ln());
    acc
}

/// One point of the closed-form vs. log-domain check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximationSample {
    pub z: f64,
    pub closed_form: f64,
    pub log_domain: f64,
}

impl ApproximationSample {
    /// `ln(closed_form) − log_domain`
    pub fn divergence(&self) -> f64 {
        self.closed_form.ln() - self.log_domain
    }
}

/// Evaluate both forms at `z`
pub fn sample(z: f64) -> Result<ApproximationSample> {
    check_domain("sample", z)?;
    Ok(ApproximationSample {
        z,
        closed_form: closed_form_unchecked(z),
        log_domain: log_domain_unchecked(z),
    })
}

/// Grid the divergence sweep runs on by default
pub fn default_divergence_grid() -> Grid {
    Grid::linspace(DIVERGENCE_START, DIVERGENCE_STOP, DIVERGENCE_POINTS)
}

/// `ln(closed_form(z)) − log_domain(z)` at every point of `grid`
///
/// Fails with a domain error on the first non-positive grid point.
#[instrument(level = "debug", skip(grid), fields(points = grid.len()))]
pub fn log_domain_divergence(grid: &Grid) -> Result<NumericVector> {
    let values = grid
        .values()
        .into_iter()
        .map(|z| sample(z).map(|s| s.divergence()))
        .collect::<Result<Vec<f64>>>()?;

    let result = NumericVector::new(values, grid.clone());
    debug!(
        "Nemes log-domain divergence over {}: max |d| = {:e}",
        grid,
        result.max_abs().unwrap_or(f64::NAN)
    );
    Ok(result)
}

/// Points of `[start, stop]` at which the closed form is still finite
///
/// Handy for sweeps that extend past the overflow threshold.
pub fn representable_points(start: f64, stop: f64, count: usize) -> Vec<f64> {
    linspace(start, stop, count)
        .into_iter()
        .filter(|&z| z > 0.0 && closed_form_unchecked(z).is_finite())
        .collect()
}
