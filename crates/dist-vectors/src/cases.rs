//! The reference-vector cases
//!
//! Each case fixes a function, a parameterized distribution and an input
//! grid. The case name doubles as the vector name in a store, so the same
//! table must be used on both sides of a comparison.

use dist_catalog::{DistributionSpec, Family};
use dist_core::{Grid, Result};
use std::fmt;

/// Number of probabilities quantile cases are evaluated at
pub const QUANTILE_POINTS: usize = 101;

/// Which function of a distribution a case evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Quantile,
    Cdf,
    /// PDF or PMF depending on the distribution kind
    Density,
}

impl FunctionKind {
    /// Prefix used in case names
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Quantile => "q",
            Self::Cdf => "c",
            Self::Density => "d",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quantile => write!(f, "quantile"),
            Self::Cdf => write!(f, "cdf"),
            Self::Density => write!(f, "density"),
        }
    }
}

/// One function of one distribution on one grid
#[derive(Debug, Clone)]
pub struct ReferenceCase {
    name: String,
    function: FunctionKind,
    spec: DistributionSpec,
    grid: Grid,
}

impl ReferenceCase {
    /// Case named `<prefix>_<distribution>`
    pub fn new(function: FunctionKind, spec: DistributionSpec, grid: Grid) -> Self {
        Self {
            name: format!("{}_{}", function.prefix(), spec.name()),
            function,
            spec,
            grid,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the persisted vector
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }

    pub fn function(&self) -> FunctionKind {
        self.function
    }

    pub fn spec(&self) -> &DistributionSpec {
        &self.spec
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

fn case(function: FunctionKind, family: Family, grid: Grid) -> ReferenceCase {
    let spec = DistributionSpec::from_family(family.name(), family);
    ReferenceCase::new(function, spec, grid)
}

/// Every reference case, quantiles first, then CDFs, then densities
pub fn reference_cases() -> Result<Vec<ReferenceCase>> {
    use FunctionKind::{Cdf, Density, Quantile};

    let probabilities = || Grid::probabilities(QUANTILE_POINTS);
    let mut cases = vec![
        case(Quantile, Family::bernoulli(0.73)?, probabilities()),
        case(Quantile, Family::binomial(30, 0.2)?, probabilities()),
        case(Quantile, Family::cauchy(5.6, 1.3)?, probabilities()),
        case(Quantile, Family::exponential(2.356)?, probabilities()),
        case(Quantile, Family::laplace(-53.0, 12.0)?, probabilities()),
        case(Quantile, Family::logistic(-0.004, 0.02)?, probabilities()),
        case(Quantile, Family::poisson(4.3)?, probabilities()),
        case(Quantile, Family::uniform(13.444, 56.876)?, probabilities()),
    ];

    cases.extend([
        case(
            Cdf,
            Family::bernoulli(0.6)?,
            Grid::points(vec![1.0, 0.0, 0.0, 1.0]),
        ),
        case(Cdf, Family::binomial(30, 0.34)?, Grid::linspace(0.0, 30.0, 31)),
        case(Cdf, Family::cauchy(-5.3, 4.0)?, Grid::linspace(-25.66, 198.1, 101)),
        case(Cdf, Family::exponential(2.8)?, Grid::linspace(-1.22, 13.99, 101)),
        case(Cdf, Family::laplace(3.01, 0.667)?, Grid::linspace(-1.22, 5.99, 101)),
        case(Cdf, Family::logistic(15.9, 4.32)?, Grid::linspace(-14.2, 53.29, 101)),
        case(Cdf, Family::poisson(36.3)?, Grid::linspace(0.0, 100.0, 101)),
        case(
            Cdf,
            Family::uniform(10.334, 10009.8)?,
            Grid::linspace(-1440.2, 13000.4, 101),
        ),
    ]);

    cases.extend([
        case(Density, Family::beta(2.9, 6.7)?, Grid::linspace(0.0, 1.0, 101)),
        case(Density, Family::gamma(3.0, 3.8)?, Grid::linspace(0.0, 27.1, 101)),
        case(
            Density,
            Family::gaussian(5900.5, 434.5)?,
            Grid::linspace(3603.8, 7321.1, 101),
        ),
        case(
            Density,
            Family::lognormal(12.4, 3.111)?,
            Grid::linspace(10.66, 13.6, 101),
        ),
    ]);

    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_case_table() {
        let cases = reference_cases().unwrap();
        assert_eq!(cases.len(), 20);

        let names: HashSet<_> = cases.iter().map(|c| c.file_name()).collect();
        assert_eq!(names.len(), cases.len());
        assert!(names.contains("q_poisson.csv"));
        assert!(names.contains("c_bernoulli.csv"));
        assert!(names.contains("d_lognormal.csv"));

        let count = |kind| cases.iter().filter(|c| c.function() == kind).count();
        assert_eq!(count(FunctionKind::Quantile), 8);
        assert_eq!(count(FunctionKind::Cdf), 8);
        assert_eq!(count(FunctionKind::Density), 4);
    }

    #[test]
    fn test_grids_and_parameters() {
        let cases = reference_cases().unwrap();
        let find = |name: &str| cases.iter().find(|c| c.name() == name).unwrap();

        assert_eq!(find("q_cauchy").grid(), &Grid::probabilities(101));
        assert_eq!(find("c_bernoulli").grid().len(), 4);
        assert_eq!(find("c_binomial").grid().len(), 31);
        assert_eq!(find("c_binomial").spec().parameters(), &[30.0, 0.34]);
        assert_eq!(find("d_gamma").spec().parameters(), &[3.0, 3.8]);
        assert_eq!(find("q_exponential").spec().parameters(), &[2.356]);
    }

    #[test]
    fn test_function_kind_display() {
        assert_eq!(FunctionKind::Quantile.to_string(), "quantile");
        assert_eq!(FunctionKind::Density.prefix(), "d");
    }
}
