//! Numeric vectors and the grids they are evaluated on

use std::fmt;

/// Deterministic description of the inputs a vector was evaluated at
///
/// A grid is enough to regenerate the input points bit-for-bit, so two
/// vectors carrying equal grids are known to be element-wise comparable.
#[derive(Debug, Clone, PartialEq)]
pub enum Grid {
    /// `count` evenly spaced points from `start` to `stop`, both included
    Linspace { start: f64, stop: f64, count: usize },
    /// An explicit list of input points
    Points(Vec<f64>),
}

impl Grid {
    /// Evenly spaced grid including both endpoints
    pub fn linspace(start: f64, stop: f64, count: usize) -> Self {
        Self::Linspace { start, stop, count }
    }

    /// Grid over an explicit list of points
    pub fn points(points: Vec<f64>) -> Self {
        Self::Points(points)
    }

    /// `count` evenly spaced probabilities on `[0, 1]`
    pub fn probabilities(count: usize) -> Self {
        Self::linspace(0.0, 1.0, count)
    }

    /// Number of points in the grid
    pub fn len(&self) -> usize {
        match self {
            Self::Linspace { count, .. } => *count,
            Self::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize the grid points
    ///
    /// Linspace points are computed as `start + i * step` with the last
    /// point pinned to `stop`, matching the usual array-library convention.
    pub fn values(&self) -> Vec<f64> {
        match self {
            Self::Points(points) => points.clone(),
            Self::Linspace { start, stop, count } => linspace(*start, *stop, *count),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linspace { start, stop, count } => {
                write!(f, "linspace({start}, {stop}, {count})")
            }
            Self::Points(points) => write!(f, "points[{}]", points.len()),
        }
    }
}

/// Evenly spaced values over `[start, stop]`
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// An ordered sequence of doubles, optionally tagged with its input grid
///
/// Vectors loaded from a store carry no grid; vectors produced by the
/// generator always do.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericVector {
    values: Vec<f64>,
    grid: Option<Grid>,
}

impl NumericVector {
    /// Create a vector evaluated on a known grid
    pub fn new(values: Vec<f64>, grid: Grid) -> Self {
        Self {
            values,
            grid: Some(grid),
        }
    }

    /// Create a vector with no grid descriptor
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values, grid: None }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Largest absolute finite entry, ignoring NaN and infinities
    ///
    /// Returns `None` when the vector has no finite entries.
    pub fn max_abs(&self) -> Option<f64> {
        self.values
            .iter()
            .filter(|v| v.is_finite())
            .map(|v| v.abs())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}

impl AsRef<[f64]> for NumericVector {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a NumericVector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
