//! Core types for distribution validation
//!
//! This crate holds the pieces every other dist-check crate agrees on:
//!
//! - **Error taxonomy**: [`Error`] and the crate-wide [`Result`] alias
//! - **Numeric vectors**: [`NumericVector`], the unit of comparison between
//!   two implementations of the same function
//! - **Grids**: [`Grid`], a deterministic descriptor of the inputs a vector
//!   was evaluated at
//!
//! # Example
//!
//! ```rust
//! use dist_core::{Grid, NumericVector};
//!
//! let grid = Grid::probabilities(101);
//! let values: Vec<f64> = grid.values().iter().map(|p| p * 2.0).collect();
//! let vector = NumericVector::new(values, grid);
//! assert_eq!(vector.len(), 101);
//! ```

pub mod error;
pub mod vector;

// Re-export core types
pub use error::{Error, Result};
pub use vector::{linspace, Grid, NumericVector};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
