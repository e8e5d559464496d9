//! Named, parameterized distributions

use crate::families::Family;
use crate::table::MassTable;
use crate::traits::{DistributionFunctions, Kind};
use dist_core::{Error, Result};
use std::sync::Arc;

/// How a catalogue entry is evaluated
#[derive(Debug, Clone)]
pub enum Evaluators {
    /// A parametric family with quantile, CDF and density
    Parametric(Arc<dyn DistributionFunctions>),
    /// An explicit mass table over a finite label set
    Table(MassTable),
}

impl Evaluators {
    pub fn parametric<F: DistributionFunctions + 'static>(functions: F) -> Self {
        Self::Parametric(Arc::new(functions))
    }

    /// Kind implied by the evaluators themselves
    pub fn kind(&self) -> Kind {
        match self {
            Self::Parametric(f) => f.kind(),
            Self::Table(_) => Kind::Discrete,
        }
    }

    /// Parameters the evaluators actually use; probabilities for a table
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            Self::Parametric(f) => f.parameters(),
            Self::Table(t) => t.probabilities().to_vec(),
        }
    }
}

impl From<Family> for Evaluators {
    fn from(family: Family) -> Self {
        Self::parametric(family)
    }
}

impl From<MassTable> for Evaluators {
    fn from(table: MassTable) -> Self {
        Self::Table(table)
    }
}

/// A named distribution bound to concrete parameters
///
/// Cloning is cheap: parametric evaluators are shared.
#[derive(Debug, Clone)]
pub struct DistributionSpec {
    name: String,
    kind: Kind,
    parameters: Vec<f64>,
    evaluators: Evaluators,
}

impl DistributionSpec {
    /// Create a spec, checking that `kind` and `parameters` agree with the
    /// evaluators
    pub fn new(
        name: impl Into<String>,
        kind: Kind,
        parameters: Vec<f64>,
        evaluators: Evaluators,
    ) -> Result<Self> {
        let name = name.into();
        if evaluators.kind() != kind {
            return Err(Error::Configuration(format!(
                "'{name}' declared {kind} but its evaluators are {}",
                evaluators.kind()
            )));
        }
        let expected = evaluators.parameters();
        if parameters != expected {
            return Err(Error::Configuration(format!(
                "'{name}' declared parameters {parameters:?} but its evaluators use {expected:?}"
            )));
        }
        Ok(Self {
            name,
            kind,
            parameters,
            evaluators,
        })
    }

    /// Spec for a parametric family, parameters taken from the family
    pub fn from_family(name: impl Into<String>, family: Family) -> Self {
        Self {
            name: name.into(),
            kind: family.kind(),
            parameters: family.parameters(),
            evaluators: Evaluators::from(family),
        }
    }

    /// Spec for a mass table; its parameters are the probabilities
    pub fn from_table(name: impl Into<String>, table: MassTable) -> Self {
        Self {
            name: name.into(),
            kind: Kind::Discrete,
            parameters: table.probabilities().to_vec(),
            evaluators: Evaluators::Table(table),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    pub fn evaluators(&self) -> &Evaluators {
        &self.evaluators
    }

    /// The mass table, for categorical entries
    pub fn table(&self) -> Option<&MassTable> {
        match &self.evaluators {
            Evaluators::Table(table) => Some(table),
            Evaluators::Parametric(_) => None,
        }
    }

    pub fn quantile(&self, p: f64) -> f64 {
        match &self.evaluators {
            Evaluators::Parametric(f) => f.quantile(p),
            Evaluators::Table(t) => t.quantile(p),
        }
    }

    pub fn cdf(&self, x: f64) -> f64 {
        match &self.evaluators {
            Evaluators::Parametric(f) => f.cdf(x),
            Evaluators::Table(t) => t.cdf(x),
        }
    }

    /// PDF or PMF depending on the kind
    pub fn density(&self, x: f64) -> f64 {
        match &self.evaluators {
            Evaluators::Parametric(f) => f.density(x),
            Evaluators::Table(t) => t.pmf(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_must_match_evaluators() {
        let family = Family::gaussian(0.0, 1.0).unwrap();
        let result =
            DistributionSpec::new("gaussian", Kind::Discrete, vec![0.0, 1.0], family.into());
        assert!(matches!(result, Err(Error::Configuration(_))));

        let table = MassTable::consecutive(0, vec![0.5, 0.5]).unwrap();
        let spec = DistributionSpec::new("coin", Kind::Discrete, vec![0.5, 0.5], table.into())
            .unwrap();
        assert_eq!(spec.kind(), Kind::Discrete);
        assert!(spec.table().is_some());
    }

    #[test]
    fn test_parameters_must_match_evaluators() {
        let family = Family::gaussian(0.0, 1.0).unwrap();
        let result =
            DistributionSpec::new("gaussian", Kind::Continuous, vec![5.0, 5.0], family.into());
        assert!(matches!(result, Err(Error::Configuration(_))));

        let family = Family::gaussian(0.0, 1.0).unwrap();
        let spec =
            DistributionSpec::new("gaussian", Kind::Continuous, vec![0.0, 1.0], family.into())
                .unwrap();
        assert_eq!(spec.parameters(), &[0.0, 1.0]);

        let table = MassTable::consecutive(0, vec![0.5, 0.5]).unwrap();
        let result = DistributionSpec::new("coin", Kind::Discrete, vec![0.3, 0.7], table.into());
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_dispatch() {
        let spec = DistributionSpec::from_family("poisson", Family::poisson(14.5).unwrap());
        assert_eq!(spec.name(), "poisson");
        assert_eq!(spec.parameters(), &[14.5]);
        assert!(spec.table().is_none());
        assert!(spec.density(14.0) > 0.0);
        assert_eq!(spec.quantile(0.0), -1.0);

        let table = MassTable::consecutive(1, vec![0.25, 0.75]).unwrap();
        let spec = DistributionSpec::from_table("categorical", table);
        assert_eq!(spec.density(2.0), 0.75);
        assert_eq!(spec.cdf(1.0), 0.25);
        assert_eq!(spec.quantile(0.3), 2.0);
    }
}
