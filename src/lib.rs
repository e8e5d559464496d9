//! Cross-implementation validation of probability distribution functions
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`dist_core`]: error taxonomy, numeric vectors and their grids
//! - [`dist_special`]: Nemes' Gamma approximation and its log-domain form
//! - [`dist_catalog`]: the distribution catalogue and truncated-density
//!   renormalization
//! - [`dist_vectors`]: reference vector generation, persistence and comparison
//!
//! # Example
//!
//! ```rust
//! use dist_check::prelude::*;
//!
//! let catalog = reference_catalog().unwrap();
//! let engine = RenormalizationEngine::default();
//! for (name, result) in engine.renormalize_all(catalog) {
//!     match result {
//!         Ok(report) => assert!(report.total > 0.0, "{name}"),
//!         Err(e) => println!("{name}: {e}"),
//!     }
//! }
//!
//! let z = 50.0;
//! let stable = dist_check::dist_special::log_domain(z).unwrap();
//! assert!(stable.is_finite());
//! ```

pub use dist_catalog;
pub use dist_core;
pub use dist_special;
pub use dist_vectors;

pub use dist_core::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use dist_catalog::prelude::*;
    pub use dist_core::{Error, Grid, NumericVector, Result};
    pub use dist_special::{closed_form, log_domain, log_domain_divergence};
    pub use dist_vectors::{
        reference_cases, CrossImplementationComparator, DirectoryStore, MemoryStore,
        ReferenceVectorGenerator, VectorStore,
    };
}
