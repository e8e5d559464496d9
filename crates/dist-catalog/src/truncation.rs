//! Truncation intervals and sets of them

use dist_core::{Error, Result};
use std::fmt;

/// A closed interval `[lo, hi]`; `lo == hi` is allowed and has zero width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(Error::Configuration(format!(
                "Interval bounds must be finite, got [{lo}, {hi}]"
            )));
        }
        if lo > hi {
            return Err(Error::Configuration(format!(
                "Interval lower bound {lo} exceeds upper bound {hi}"
            )));
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// `hi - lo`
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Integers inside the interval, endpoints included
    pub fn integer_points(&self) -> impl Iterator<Item = i64> {
        let first = self.lo.ceil() as i64;
        let last = self.hi.floor() as i64;
        first..=last
    }

    fn overlaps(&self, other: &Interval) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Pairwise disjoint closed intervals attached to one distribution
///
/// Order is preserved as given. An empty set is representable; it is the
/// renormalization step that rejects it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TruncationSet {
    intervals: Vec<Interval>,
}

impl TruncationSet {
    pub fn new(intervals: Vec<Interval>) -> Result<Self> {
        for (i, a) in intervals.iter().enumerate() {
            if let Some(b) = intervals[i + 1..].iter().find(|b| a.overlaps(b)) {
                return Err(Error::Configuration(format!(
                    "Truncation intervals {a} and {b} overlap"
                )));
            }
        }
        Ok(Self { intervals })
    }

    /// Build from `(lo, hi)` pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let intervals = pairs
            .iter()
            .map(|&(lo, hi)| Interval::new(lo, hi))
            .collect::<Result<Vec<_>>>()?;
        Self::new(intervals)
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Whether `x` lies in the union of the intervals
    pub fn contains(&self, x: f64) -> bool {
        self.intervals.iter().any(|i| i.contains(x))
    }

    /// Smallest interval containing every interval of the set
    pub fn hull(&self) -> Option<Interval> {
        let lo = self.intervals.iter().map(Interval::lo).reduce(f64::min)?;
        let hi = self.intervals.iter().map(Interval::hi).reduce(f64::max)?;
        Some(Interval { lo, hi })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_validation() {
        assert!(Interval::new(1.0, 0.0).is_err());
        assert!(Interval::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Interval::new(0.0, f64::NAN).is_err());
        let degenerate = Interval::new(-141.3, -141.3).unwrap();
        assert!(degenerate.is_degenerate());
        assert_eq!(degenerate.width(), 0.0);
    }

    #[test]
    fn test_integer_points() {
        let i = Interval::new(17.0, 26.0).unwrap();
        assert_eq!(i.integer_points().count(), 10);

        let i = Interval::new(12.0, 12.0).unwrap();
        assert_eq!(i.integer_points().collect::<Vec<_>>(), vec![12]);

        let i = Interval::new(0.2, 0.8).unwrap();
        assert_eq!(i.integer_points().count(), 0);

        let i = Interval::new(-2.5, 1.5).unwrap();
        assert_eq!(i.integer_points().collect::<Vec<_>>(), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn test_overlap_rejected() {
        assert!(TruncationSet::from_pairs(&[(0.0, 2.0), (1.0, 3.0)]).is_err());
        // Shared endpoint counts as overlap for closed intervals
        assert!(TruncationSet::from_pairs(&[(0.0, 1.0), (1.0, 3.0)]).is_err());
        // Order does not matter for the check
        assert!(TruncationSet::from_pairs(&[(5.0, 6.0), (0.0, 5.5)]).is_err());
    }

    #[test]
    fn test_contains_and_hull() {
        let set = TruncationSet::from_pairs(&[(30.0, 50.0), (100.0, 150.0), (155.0, 170.0)])
            .unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(30.0));
        assert!(!set.contains(152.0));
        assert!(set.contains(170.0));
        assert_eq!(set.hull(), Some(Interval::new(30.0, 170.0).unwrap()));
        assert_eq!(TruncationSet::default().hull(), None);
    }
}
