//! Asymptotic Gamma function approximation
//!
//! Implements Nemes' closed-form approximation to `Γ(z)` together with an
//! algebraically equivalent log-domain form that cannot overflow. The
//! property this crate exists to check is that the two agree to rounding
//! error wherever the closed form is representable.
//!
//! # Example
//!
//! ```rust
//! use dist_special::{closed_form, log_domain};
//!
//! let z = 12.5;
//! let direct = closed_form(z).unwrap().ln();
//! let stable = log_domain(z).unwrap();
//! assert!((direct - stable).abs() < 1e-10);
//! ```

pub mod nemes;

pub use nemes::{
    closed_form, default_divergence_grid, log_domain, log_domain_divergence,
    representable_points, sample, shifted, ApproximationSample,
};
