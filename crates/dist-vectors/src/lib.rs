//! Reference vectors and cross-implementation comparison
//!
//! Evaluates catalogue functions on fixed grids, persists the results in a
//! plain-text format shared with an independent implementation, and
//! reports element-wise discrepancies between the two.
//!
//! # Example
//!
//! ```rust
//! use dist_vectors::{
//!     reference_cases, CrossImplementationComparator, MemoryStore, ReferenceVectorGenerator,
//! };
//!
//! let cases = reference_cases().unwrap();
//! let generator = ReferenceVectorGenerator::new();
//!
//! let mut ours = MemoryStore::new();
//! let mut theirs = MemoryStore::new();
//! generator.generate_all(&cases, &mut ours).unwrap();
//! generator.generate_all(&cases, &mut theirs).unwrap();
//!
//! let comparator = CrossImplementationComparator::new(&ours, &theirs);
//! let diff = comparator.compare("c_poisson.csv").unwrap();
//! assert_eq!(diff.max_abs(), Some(0.0));
//! ```

pub mod cases;
pub mod comparator;
pub mod format;
pub mod generator;
pub mod store;

pub use cases::{reference_cases, FunctionKind, ReferenceCase};
pub use comparator::{compare_vectors, CrossImplementationComparator};
pub use format::PersistencePolicy;
pub use generator::ReferenceVectorGenerator;
pub use store::{DirectoryStore, MemoryStore, VectorStore};
