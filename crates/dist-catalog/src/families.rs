//! Parametric distribution families
//!
//! Densities and cumulative probabilities come from `statrs`. Quantiles are
//! computed here: closed forms where they exist, a bracketed bisection on
//! the CDF for Beta and Gamma, and an integer search for the discrete
//! families. The conventions follow the usual scientific-library ones so
//! that vectors can be compared against an independent implementation:
//!
//! - discrete `quantile(0)` is one below the support minimum, `quantile(1)`
//!   is the support maximum (`inf` for Poisson)
//! - continuous `quantile(0)` / `quantile(1)` are the support bounds,
//!   possibly infinite

use crate::traits::{DistributionFunctions, Kind};
use dist_core::{Error, Result};
use statrs::distribution::{
    Bernoulli, Beta, Binomial, Cauchy, Continuous, ContinuousCDF, Discrete, DiscreteCDF, Exp,
    Gamma, Laplace, LogNormal, Normal, Poisson, Uniform,
};
use statrs::function::erf::erfc_inv;
use statrs::StatsError;
use std::f64::consts::{PI, SQRT_2};

/// Bisection iterations for numerically inverted CDFs
const BISECTION_ITERATIONS: usize = 200;

fn provider_error(family: &str, err: StatsError) -> Error {
    Error::Configuration(format!("Invalid {family} parameters: {err}"))
}

/// A parametric family bound to concrete parameter values
#[derive(Debug, Clone)]
pub enum Family {
    Bernoulli { p: f64, inner: Bernoulli },
    Beta { alpha: f64, beta: f64, inner: Beta },
    Binomial { n: u64, p: f64, inner: Binomial },
    Cauchy { location: f64, scale: f64, inner: Cauchy },
    Exponential { rate: f64, inner: Exp },
    Gamma { shape: f64, scale: f64, inner: Gamma },
    Gaussian { mean: f64, std_dev: f64, inner: Normal },
    Laplace { location: f64, scale: f64, inner: Laplace },
    Logistic { location: f64, scale: f64 },
    Lognormal { mu: f64, sigma: f64, inner: LogNormal },
    Poisson { lambda: f64, inner: Poisson },
    Uniform { min: f64, max: f64, inner: Uniform },
}

impl Family {
    pub fn bernoulli(p: f64) -> Result<Self> {
        let inner = Bernoulli::new(p).map_err(|e| provider_error("bernoulli", e))?;
        Ok(Self::Bernoulli { p, inner })
    }

    pub fn beta(alpha: f64, beta: f64) -> Result<Self> {
        let inner = Beta::new(alpha, beta).map_err(|e| provider_error("beta", e))?;
        Ok(Self::Beta { alpha, beta, inner })
    }

    pub fn binomial(n: u64, p: f64) -> Result<Self> {
        let inner = Binomial::new(p, n).map_err(|e| provider_error("binomial", e))?;
        Ok(Self::Binomial { n, p, inner })
    }

    pub fn cauchy(location: f64, scale: f64) -> Result<Self> {
        let inner = Cauchy::new(location, scale).map_err(|e| provider_error("cauchy", e))?;
        Ok(Self::Cauchy {
            location,
            scale,
            inner,
        })
    }

    pub fn exponential(rate: f64) -> Result<Self> {
        let inner = Exp::new(rate).map_err(|e| provider_error("exponential", e))?;
        Ok(Self::Exponential { rate, inner })
    }

    /// Gamma with shape `k` and scale `θ` (the provider takes a rate)
    pub fn gamma(shape: f64, scale: f64) -> Result<Self> {
        if !(scale > 0.0) || !scale.is_finite() {
            return Err(Error::Configuration(format!(
                "Invalid gamma parameters: scale {scale} must be positive and finite"
            )));
        }
        let inner = Gamma::new(shape, 1.0 / scale).map_err(|e| provider_error("gamma", e))?;
        Ok(Self::Gamma {
            shape,
            scale,
            inner,
        })
    }

    pub fn gaussian(mean: f64, std_dev: f64) -> Result<Self> {
        let inner = Normal::new(mean, std_dev).map_err(|e| provider_error("gaussian", e))?;
        Ok(Self::Gaussian {
            mean,
            std_dev,
            inner,
        })
    }

    pub fn laplace(location: f64, scale: f64) -> Result<Self> {
        let inner = Laplace::new(location, scale).map_err(|e| provider_error("laplace", e))?;
        Ok(Self::Laplace {
            location,
            scale,
            inner,
        })
    }

    pub fn logistic(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() || !(scale > 0.0) || !scale.is_finite() {
            return Err(Error::Configuration(format!(
                "Invalid logistic parameters: location {location}, scale {scale}"
            )));
        }
        Ok(Self::Logistic { location, scale })
    }

    /// Log-normal whose logarithm has mean `mu` and standard deviation `sigma`
    pub fn lognormal(mu: f64, sigma: f64) -> Result<Self> {
        let inner = LogNormal::new(mu, sigma).map_err(|e| provider_error("lognormal", e))?;
        Ok(Self::Lognormal { mu, sigma, inner })
    }

    pub fn poisson(lambda: f64) -> Result<Self> {
        let inner = Poisson::new(lambda).map_err(|e| provider_error("poisson", e))?;
        Ok(Self::Poisson { lambda, inner })
    }

    /// Continuous uniform on `[min, max]`
    pub fn uniform(min: f64, max: f64) -> Result<Self> {
        let inner = Uniform::new(min, max).map_err(|e| provider_error("uniform", e))?;
        Ok(Self::Uniform { min, max, inner })
    }

    /// Family name in lower case
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bernoulli { .. } => "bernoulli",
            Self::Beta { .. } => "beta",
            Self::Binomial { .. } => "binomial",
            Self::Cauchy { .. } => "cauchy",
            Self::Exponential { .. } => "exponential",
            Self::Gamma { .. } => "gamma",
            Self::Gaussian { .. } => "gaussian",
            Self::Laplace { .. } => "laplace",
            Self::Logistic { .. } => "logistic",
            Self::Lognormal { .. } => "lognormal",
            Self::Poisson { .. } => "poisson",
            Self::Uniform { .. } => "uniform",
        }
    }

    /// Parameter values in constructor order
    pub fn parameters(&self) -> Vec<f64> {
        match *self {
            Self::Bernoulli { p, .. } => vec![p],
            Self::Beta { alpha, beta, .. } => vec![alpha, beta],
            Self::Binomial { n, p, .. } => vec![n as f64, p],
            Self::Cauchy {
                location, scale, ..
            } => vec![location, scale],
            Self::Exponential { rate, .. } => vec![rate],
            Self::Gamma { shape, scale, .. } => vec![shape, scale],
            Self::Gaussian { mean, std_dev, .. } => vec![mean, std_dev],
            Self::Laplace {
                location, scale, ..
            } => vec![location, scale],
            Self::Logistic { location, scale } => vec![location, scale],
            Self::Lognormal { mu, sigma, .. } => vec![mu, sigma],
            Self::Poisson { lambda, .. } => vec![lambda],
            Self::Uniform { min, max, .. } => vec![min, max],
        }
    }
}

impl DistributionFunctions for Family {
    fn kind(&self) -> Kind {
        match self {
            Self::Bernoulli { .. } | Self::Binomial { .. } | Self::Poisson { .. } => Kind::Discrete,
            _ => Kind::Continuous,
        }
    }

    fn parameters(&self) -> Vec<f64> {
        Family::parameters(self)
    }

    fn quantile(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        match self {
            Self::Bernoulli { inner, .. } => discrete_quantile(p, 1.0, |k| inner.cdf(k)),
            Self::Binomial { n, inner, .. } => discrete_quantile(p, *n as f64, |k| inner.cdf(k)),
            Self::Poisson { inner, .. } => discrete_quantile(p, f64::INFINITY, |k| inner.cdf(k)),
            Self::Beta { inner, .. } => bisect_quantile(p, 0.0, 1.0, |x| inner.cdf(x)),
            Self::Gamma { inner, .. } => bisect_quantile(p, 0.0, f64::INFINITY, |x| inner.cdf(x)),
            Self::Cauchy {
                location, scale, ..
            } => match p {
                p if p == 0.0 => f64::NEG_INFINITY,
                p if p == 1.0 => f64::INFINITY,
                p => location + scale * (PI * (p - 0.5)).tan(),
            },
            Self::Exponential { rate, .. } => -(-p).ln_1p() / rate,
            Self::Gaussian { mean, std_dev, .. } => mean + std_dev * standard_normal_quantile(p),
            Self::Laplace {
                location, scale, ..
            } => {
                if p <= 0.5 {
                    location + scale * (2.0 * p).ln()
                } else {
                    location - scale * (2.0 * (1.0 - p)).ln()
                }
            }
            Self::Logistic { location, scale } => location + scale * (p / (1.0 - p)).ln(),
            Self::Lognormal { mu, sigma, .. } => (mu + sigma * standard_normal_quantile(p)).exp(),
            Self::Uniform { min, max, .. } => min + p * (max - min),
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        match self {
            Self::Bernoulli { inner, .. } => discrete_cdf(x, |k| inner.cdf(k)),
            Self::Binomial { inner, .. } => discrete_cdf(x, |k| inner.cdf(k)),
            Self::Poisson { inner, .. } => discrete_cdf(x, |k| inner.cdf(k)),
            Self::Beta { inner, .. } => inner.cdf(x),
            Self::Cauchy { inner, .. } => inner.cdf(x),
            Self::Exponential { inner, .. } => inner.cdf(x),
            Self::Gamma { inner, .. } => {
                if x <= 0.0 {
                    0.0
                } else {
                    inner.cdf(x)
                }
            }
            Self::Gaussian { inner, .. } => inner.cdf(x),
            Self::Laplace { inner, .. } => inner.cdf(x),
            Self::Logistic { location, scale } => logistic_cdf(x, *location, *scale),
            Self::Lognormal { inner, .. } => {
                if x <= 0.0 {
                    0.0
                } else {
                    inner.cdf(x)
                }
            }
            Self::Uniform { inner, .. } => inner.cdf(x),
        }
    }

    fn density(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        match self {
            Self::Bernoulli { inner, .. } => discrete_pmf(x, |k| inner.pmf(k)),
            Self::Binomial { inner, .. } => discrete_pmf(x, |k| inner.pmf(k)),
            Self::Poisson { inner, .. } => discrete_pmf(x, |k| inner.pmf(k)),
            Self::Beta { inner, .. } => {
                if !(0.0..=1.0).contains(&x) {
                    0.0
                } else {
                    inner.pdf(x)
                }
            }
            Self::Cauchy { inner, .. } => inner.pdf(x),
            Self::Exponential { inner, .. } => inner.pdf(x),
            Self::Gamma { inner, .. } => {
                if x < 0.0 {
                    0.0
                } else {
                    inner.pdf(x)
                }
            }
            Self::Gaussian { inner, .. } => inner.pdf(x),
            Self::Laplace { inner, .. } => inner.pdf(x),
            Self::Logistic { location, scale } => logistic_pdf(x, *location, *scale),
            Self::Lognormal { inner, .. } => {
                if x <= 0.0 {
                    0.0
                } else {
                    inner.pdf(x)
                }
            }
            Self::Uniform { inner, .. } => inner.pdf(x),
        }
    }
}

/// Standard normal inverse CDF, `-√2 · erfc⁻¹(2p)`
fn standard_normal_quantile(p: f64) -> f64 {
    if p == 0.0 {
        f64::NEG_INFINITY
    } else if p == 1.0 {
        f64::INFINITY
    } else {
        -SQRT_2 * erfc_inv(2.0 * p)
    }
}

/// Logistic CDF: F(x|μ, s) = 1 / (1 + exp(-(x-μ)/s))
fn logistic_cdf(x: f64, location: f64, scale: f64) -> f64 {
    let z = (x - location) / scale;
    1.0 / (1.0 + (-z).exp())
}

/// Logistic PDF, written in |z| so the exponential never overflows
fn logistic_pdf(x: f64, location: f64, scale: f64) -> f64 {
    let z = ((x - location) / scale).abs();
    let ez = (-z).exp();
    ez / (scale * (1.0 + ez).powi(2))
}

/// Integer-supported CDF extended to the real line
fn discrete_cdf(x: f64, cdf: impl Fn(u64) -> f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x.is_infinite() {
        1.0
    } else {
        cdf(x.floor() as u64)
    }
}

/// PMF extended to the real line; non-integers carry no mass
fn discrete_pmf(x: f64, pmf: impl Fn(u64) -> f64) -> f64 {
    if x < 0.0 || !x.is_finite() || x.fract() != 0.0 {
        0.0
    } else {
        pmf(x as u64)
    }
}

/// Smallest integer `k` with `cdf(k) >= p`, for support starting at zero
fn discrete_quantile(p: f64, support_max: f64, cdf: impl Fn(u64) -> f64) -> f64 {
    if p == 0.0 {
        return -1.0;
    }
    if p == 1.0 {
        return support_max;
    }
    if cdf(0) >= p {
        return 0.0;
    }

    // Bracket: cdf(lo) < p <= cdf(hi)
    let mut lo: u64 = 0;
    let mut hi: u64 = 1;
    while cdf(hi) < p {
        if hi as f64 >= support_max || hi >= 1 << 62 {
            return support_max.min(hi as f64);
        }
        lo = hi;
        hi *= 2;
    }
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if cdf(mid) >= p {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    hi as f64
}

/// Invert a continuous CDF by bisection on `[lower, upper]`
///
/// An infinite `upper` is bracketed by doubling outward from `lower`.
fn bisect_quantile(p: f64, lower: f64, upper: f64, cdf: impl Fn(f64) -> f64) -> f64 {
    if p == 0.0 {
        return lower;
    }
    if p == 1.0 {
        return upper;
    }

    let mut lo = lower;
    let mut hi = if upper.is_finite() {
        upper
    } else {
        let mut width = 1.0;
        while cdf(lower + width) < p {
            width *= 2.0;
            if !width.is_finite() {
                return upper;
            }
        }
        lower + width
    };

    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if cdf(mid) >= p {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_constructor_rejects_bad_parameters() {
        assert!(matches!(Family::bernoulli(1.5), Err(Error::Configuration(_))));
        assert!(matches!(Family::gaussian(0.0, -1.0), Err(Error::Configuration(_))));
        assert!(matches!(Family::gamma(2.0, 0.0), Err(Error::Configuration(_))));
        assert!(matches!(Family::logistic(0.0, 0.0), Err(Error::Configuration(_))));
        assert!(matches!(Family::uniform(5.0, 1.0), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Family::poisson(3.0).unwrap().kind(), Kind::Discrete);
        assert_eq!(Family::binomial(10, 0.5).unwrap().kind(), Kind::Discrete);
        assert_eq!(Family::cauchy(0.0, 1.0).unwrap().kind(), Kind::Continuous);
    }

    #[test]
    fn test_parameters_round_trip_constructor_order() {
        assert_eq!(Family::binomial(40, 0.62).unwrap().parameters(), vec![40.0, 0.62]);
        assert_eq!(Family::gamma(4.3, 3.4).unwrap().parameters(), vec![4.3, 3.4]);
        assert_eq!(Family::uniform(-209.6, 44.7).unwrap().parameters(), vec![-209.6, 44.7]);
    }

    #[test]
    fn test_discrete_quantile_conventions() {
        let b = Family::bernoulli(0.73).unwrap();
        assert_eq!(b.quantile(0.0), -1.0);
        assert_eq!(b.quantile(0.1), 0.0);
        assert_eq!(b.quantile(0.5), 1.0);
        assert_eq!(b.quantile(1.0), 1.0);

        let bin = Family::binomial(30, 0.2).unwrap();
        assert_eq!(bin.quantile(0.0), -1.0);
        assert_eq!(bin.quantile(1.0), 30.0);
        // Median of Binomial(30, 0.2) is 6
        assert_eq!(bin.quantile(0.5), 6.0);

        let poi = Family::poisson(4.3).unwrap();
        assert_eq!(poi.quantile(1.0), f64::INFINITY);
        assert_eq!(poi.quantile(0.5), 4.0);
    }

    #[test]
    fn test_discrete_quantile_is_smallest_meeting_p() {
        let poi = Family::poisson(14.5).unwrap();
        for i in 1..100 {
            let p = i as f64 / 100.0;
            let k = poi.quantile(p);
            assert!(poi.cdf(k) >= p);
            assert!(poi.cdf(k - 1.0) < p);
        }
    }

    #[test]
    fn test_continuous_quantile_bounds() {
        let c = Family::cauchy(5.6, 1.3).unwrap();
        assert_eq!(c.quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(c.quantile(1.0), f64::INFINITY);
        assert_relative_eq!(c.quantile(0.5), 5.6, epsilon = 1e-12);

        let e = Family::exponential(2.356).unwrap();
        assert_eq!(e.quantile(0.0), 0.0);
        assert_eq!(e.quantile(1.0), f64::INFINITY);

        let u = Family::uniform(13.444, 56.876).unwrap();
        assert_eq!(u.quantile(0.0), 13.444);
        assert_eq!(u.quantile(1.0), 56.876);

        let l = Family::laplace(-53.0, 12.0).unwrap();
        assert_eq!(l.quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(l.quantile(1.0), f64::INFINITY);
        assert_relative_eq!(l.quantile(0.5), -53.0, epsilon = 1e-12);

        let g = Family::gamma(3.0, 3.8).unwrap();
        assert_eq!(g.quantile(0.0), 0.0);
        assert_eq!(g.quantile(1.0), f64::INFINITY);
    }

    #[test]
    fn test_quantile_outside_unit_interval_is_nan() {
        let n = Family::gaussian(100.0, 15.0).unwrap();
        assert!(n.quantile(-0.1).is_nan());
        assert!(n.quantile(1.1).is_nan());
        assert!(n.quantile(f64::NAN).is_nan());
    }

    #[test]
    fn test_gaussian_quantile_known_values() {
        let n = Family::gaussian(0.0, 1.0).unwrap();
        assert_abs_diff_eq!(n.quantile(0.975), 1.959_963_984_540_054, epsilon = 1e-9);
        assert_abs_diff_eq!(n.quantile(0.5), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_logistic_functions() {
        let l = Family::logistic(0.9, 0.22).unwrap();
        assert_relative_eq!(l.cdf(0.9), 0.5, epsilon = 1e-15);
        assert_relative_eq!(l.density(0.9), 1.0 / (4.0 * 0.22), epsilon = 1e-12);
        // Far tails stay finite
        assert_eq!(l.density(1.0e6), 0.0);
        assert_eq!(l.density(-1.0e6), 0.0);
        assert_eq!(l.cdf(-1.0e6), 0.0);
    }

    #[test]
    fn test_discrete_density_off_lattice() {
        let b = Family::binomial(40, 0.62).unwrap();
        assert_eq!(b.density(12.5), 0.0);
        assert_eq!(b.density(-1.0), 0.0);
        assert!(b.density(25.0) > 0.0);
        assert_eq!(b.cdf(-0.5), 0.0);
        assert_relative_eq!(b.cdf(25.7), b.cdf(25.0), epsilon = 1e-15);
    }

    #[test]
    fn test_gamma_uses_scale() {
        // Gamma(k=1, θ) is Exponential(rate 1/θ)
        let g = Family::gamma(1.0, 2.0).unwrap();
        let e = Family::exponential(0.5).unwrap();
        for &x in &[0.5, 1.0, 3.0, 7.5] {
            assert_relative_eq!(g.density(x), e.density(x), max_relative = 1e-12);
            assert_relative_eq!(g.cdf(x), e.cdf(x), max_relative = 1e-10);
        }
    }
}
