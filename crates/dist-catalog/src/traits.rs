//! Trait definitions for distribution evaluators

use std::fmt;

/// Whether a distribution puts mass on integers or density on the reals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Discrete,
    Continuous,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Discrete => write!(f, "discrete"),
            Kind::Continuous => write!(f, "continuous"),
        }
    }
}

/// The three functions every parametric catalogue entry exposes
///
/// Implementations are pure: the same input always yields the same output,
/// and evaluation never fails. Inputs outside the support evaluate to the
/// natural limit (0 density, 0 or 1 cumulative probability); a quantile
/// probability outside `[0, 1]` yields NaN.
pub trait DistributionFunctions: Send + Sync + fmt::Debug {
    /// Discrete or continuous
    fn kind(&self) -> Kind;

    /// Parameter values the functions are evaluated with
    fn parameters(&self) -> Vec<f64>;

    /// Inverse CDF: smallest `x` with `cdf(x) >= p`
    fn quantile(&self, p: f64) -> f64;

    /// Cumulative probability `P(X <= x)`
    fn cdf(&self, x: f64) -> f64;

    /// PDF for continuous distributions, PMF for discrete ones
    fn density(&self, x: f64) -> f64;
}
