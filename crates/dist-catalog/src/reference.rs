//! The reference catalogue: fixed parameters and truncation intervals
//!
//! This is static configuration. The parameter values are the ones the
//! constrained-sampling checks were run with, and the truncation intervals
//! are the regions the constrained samplers were restricted to.

use crate::catalog::DistributionCatalog;
use crate::families::Family;
use crate::spec::DistributionSpec;
use crate::table::MassTable;
use crate::truncation::TruncationSet;
use dist_core::{Error, Result};
use lazy_static::lazy_static;

/// Labels of the reference categorical start here
pub const CATEGORICAL_FIRST_LABEL: i64 = 1;

/// Probabilities of the reference categorical, labels 1..=5
pub const CATEGORICAL_PMF: [f64; 5] = [0.1, 0.6, 0.02, 0.08, 0.2];

/// Truncation intervals per distribution, as `(lo, hi)` pairs
pub const TRUNCATIONS: &[(&str, &[(f64, f64)])] = &[
    ("bernoulli", &[(0.0, 0.0)]),
    ("beta", &[(-0.1, 0.28), (0.34, 0.38), (0.5, 0.9)]),
    ("binomial", &[(0.0, 7.0), (12.0, 12.0), (17.0, 26.0), (30.0, 40.0)]),
    ("categorical", &[(1.0, 1.0), (2.0, 2.0), (5.0, 5.0)]),
    ("cauchy", &[(0.0, 5.4), (12.0, 13.0)]),
    ("exponential", &[(0.4, 0.99), (2.01, 2.8)]),
    ("gamma", &[(11.0, 20.0), (24.0, 100.0)]),
    ("gaussian", &[(30.0, 50.0), (100.0, 150.0), (155.0, 170.0)]),
    ("laplace", &[(-20.0, -10.0)]),
    ("logistic", &[(-0.3, 0.0), (0.5, 0.81), (1.5, 15.0)]),
    ("lognormal", &[(3.22, 3.28), (3.57, 3.67)]),
    ("poisson", &[(4.0, 12.0), (16.0, 18.0), (30.0, 60.0)]),
    ("uniform", &[(-141.3, -141.3), (-101.1, -75.5), (-50.6, -26.7)]),
];

fn reference_families() -> Result<Vec<(&'static str, Family)>> {
    Ok(vec![
        ("bernoulli", Family::bernoulli(0.3)?),
        ("beta", Family::beta(2.3, 4.9)?),
        ("binomial", Family::binomial(40, 0.62)?),
        ("cauchy", Family::cauchy(6.2, 1.1)?),
        ("exponential", Family::exponential(3.76)?),
        ("gamma", Family::gamma(4.3, 3.4)?),
        ("gaussian", Family::gaussian(100.0, 15.0)?),
        ("laplace", Family::laplace(-13.9, 4.4)?),
        ("logistic", Family::logistic(0.9, 0.22)?),
        ("lognormal", Family::lognormal(0.2, 0.8)?),
        ("poisson", Family::poisson(14.5)?),
        ("uniform", Family::uniform(-209.6, 44.7)?),
    ])
}

impl DistributionCatalog {
    /// Build the reference catalogue with every truncation set declared
    pub fn reference() -> Result<Self> {
        let mut catalog = Self::new();
        for (name, family) in reference_families()? {
            catalog.insert(DistributionSpec::from_family(name, family));
        }
        let table = MassTable::consecutive(CATEGORICAL_FIRST_LABEL, CATEGORICAL_PMF.to_vec())?;
        catalog.insert(DistributionSpec::from_table("categorical", table));

        for &(name, pairs) in TRUNCATIONS {
            catalog.declare_truncation(name, TruncationSet::from_pairs(pairs)?)?;
        }
        Ok(catalog)
    }
}

lazy_static! {
    static ref REFERENCE_CATALOG: std::result::Result<DistributionCatalog, String> =
        DistributionCatalog::reference().map_err(|e| e.to_string());
}

/// Process-wide reference catalogue, built on first use
pub fn reference_catalog() -> Result<&'static DistributionCatalog> {
    REFERENCE_CATALOG
        .as_ref()
        .map_err(|msg| Error::Configuration(msg.clone()))
}
