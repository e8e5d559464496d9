//! Distribution catalogue and truncated-density renormalization
//!
//! This crate binds distribution names to concrete parameter values and
//! to the truncation intervals their constrained variants are defined on,
//! and rescales densities over those intervals.
//!
//! # Features
//!
//! - **Parametric families**: statrs-backed densities and CDFs with
//!   quantiles that follow the usual scientific-library conventions
//! - **Mass tables**: explicit categorical distributions
//! - **Reference catalogue**: the fixed table of thirteen distributions,
//!   built once per process
//! - **Renormalization**: fixed-grid mass estimates over unions of
//!   disjoint intervals
//!
//! # Example
//!
//! ```rust
//! use dist_catalog::{reference_catalog, RenormalizationEngine};
//!
//! let catalog = reference_catalog().unwrap();
//! let engine = RenormalizationEngine::default();
//! let gaussian = engine.renormalize_named(catalog, "gaussian").unwrap();
//! assert!(gaussian.mass() > 0.0 && gaussian.mass() <= 1.0);
//! assert_eq!(gaussian.density(75.0), 0.0);
//! ```

pub mod catalog;
pub mod families;
pub mod reference;
pub mod renormalize;
pub mod spec;
pub mod table;
pub mod traits;
pub mod truncation;

pub use catalog::DistributionCatalog;
pub use families::Family;
pub use reference::{reference_catalog, CATEGORICAL_PMF, TRUNCATIONS};
pub use renormalize::{
    IntervalMass, MassReport, RenormalizationEngine, RenormalizationParameters,
    RenormalizedDensity,
};
pub use spec::{DistributionSpec, Evaluators};
pub use table::MassTable;
pub use traits::{DistributionFunctions, Kind};
pub use truncation::{Interval, TruncationSet};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        reference_catalog, DistributionCatalog, DistributionSpec, Family, Kind,
        RenormalizationEngine, TruncationSet,
    };
}
