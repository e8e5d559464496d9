//! Explicit probability-mass tables over finite label sets

use dist_core::{Error, Result};

/// Total mass a table may miss 1.0 by
const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// A categorical distribution: integer labels, each with a probability
#[derive(Debug, Clone, PartialEq)]
pub struct MassTable {
    labels: Vec<i64>,
    probabilities: Vec<f64>,
}

impl MassTable {
    /// Build a table from parallel label and probability lists
    ///
    /// Labels must be strictly increasing; probabilities must be
    /// non-negative and sum to 1.
    pub fn new(labels: Vec<i64>, probabilities: Vec<f64>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::Configuration("Mass table has no labels".to_string()));
        }
        if labels.len() != probabilities.len() {
            return Err(Error::Configuration(format!(
                "Mass table has {} labels but {} probabilities",
                labels.len(),
                probabilities.len()
            )));
        }
        if labels.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::Configuration(
                "Mass table labels must be strictly increasing".to_string(),
            ));
        }
        if probabilities.iter().any(|&p| !(0.0..=1.0).contains(&p)) {
            return Err(Error::Configuration(
                "Mass table probabilities must lie in [0, 1]".to_string(),
            ));
        }
        let total: f64 = probabilities.iter().sum();
        if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
            return Err(Error::Configuration(format!(
                "Mass table probabilities sum to {total}, not 1"
            )));
        }
        Ok(Self {
            labels,
            probabilities,
        })
    }

    /// Table over consecutive labels `first, first + 1, ...`
    pub fn consecutive(first: i64, probabilities: Vec<f64>) -> Result<Self> {
        let labels = (0..probabilities.len() as i64).map(|i| first + i).collect();
        Self::new(labels, probabilities)
    }

    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Probability of `x`; zero for anything that is not a label
    pub fn pmf(&self, x: f64) -> f64 {
        if !x.is_finite() || x.fract() != 0.0 {
            return 0.0;
        }
        match self.labels.binary_search(&(x as i64)) {
            Ok(i) => self.probabilities[i],
            Err(_) => 0.0,
        }
    }

    /// `P(X <= x)`
    pub fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        self.labels
            .iter()
            .zip(&self.probabilities)
            .take_while(|&(&label, _)| label as f64 <= x)
            .map(|(_, &p)| p)
            .sum::<f64>()
            .min(1.0)
    }

    /// Smallest label whose cumulative probability reaches `p`
    ///
    /// `p = 0` yields one below the first label, matching the discrete
    /// families.
    pub fn quantile(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        if p == 0.0 {
            return (self.labels[0] - 1) as f64;
        }
        let mut cumulative = 0.0;
        for (&label, &prob) in self.labels.iter().zip(&self.probabilities) {
            cumulative += prob;
            if cumulative >= p {
                return label as f64;
            }
        }
        // Rounding left the running sum a hair under 1
        self.labels[self.labels.len() - 1] as f64
    }

    /// Exact mass of the labels inside `[lo, hi]`
    pub fn mass_between(&self, lo: f64, hi: f64) -> f64 {
        self.labels
            .iter()
            .zip(&self.probabilities)
            .filter(|&(&label, _)| (lo..=hi).contains(&(label as f64)))
            .map(|(_, &p)| p)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_table() -> MassTable {
        MassTable::consecutive(1, vec![0.1, 0.6, 0.02, 0.08, 0.2]).unwrap()
    }

    #[test]
    fn test_validation() {
        assert!(MassTable::new(vec![], vec![]).is_err());
        assert!(MassTable::new(vec![1, 2], vec![1.0]).is_err());
        assert!(MassTable::new(vec![2, 1], vec![0.5, 0.5]).is_err());
        assert!(MassTable::new(vec![1, 2], vec![0.5, 0.6]).is_err());
        assert!(MassTable::new(vec![1, 2], vec![1.5, -0.5]).is_err());
    }

    #[test]
    fn test_pmf_and_cdf() {
        let t = reference_table();
        assert_eq!(t.len(), 5);
        assert_eq!(t.pmf(2.0), 0.6);
        assert_eq!(t.pmf(2.5), 0.0);
        assert_eq!(t.pmf(9.0), 0.0);
        assert_eq!(t.cdf(0.0), 0.0);
        assert_relative_eq!(t.cdf(2.0), 0.7, epsilon = 1e-15);
        assert_relative_eq!(t.cdf(100.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_quantile() {
        let t = reference_table();
        assert_eq!(t.quantile(0.0), 0.0);
        assert_eq!(t.quantile(0.05), 1.0);
        assert_eq!(t.quantile(0.5), 2.0);
        assert_eq!(t.quantile(0.75), 4.0);
        assert_eq!(t.quantile(1.0), 5.0);
        assert!(t.quantile(2.0).is_nan());
    }

    #[test]
    fn test_mass_between() {
        let t = reference_table();
        assert_relative_eq!(
            t.mass_between(1.0, 1.0) + t.mass_between(2.0, 2.0) + t.mass_between(5.0, 5.0),
            0.9,
            epsilon = 1e-15
        );
        assert_eq!(t.mass_between(5.5, 9.0), 0.0);
    }
}
