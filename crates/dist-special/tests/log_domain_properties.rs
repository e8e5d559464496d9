//! Agreement between the closed form and the log-domain form across the
//! validated input range

use approx::assert_relative_eq;
use dist_core::Grid;
use dist_special::{
    closed_form, default_divergence_grid, log_domain, log_domain_divergence, sample, shifted,
};
use proptest::prelude::*;

/// Bound on |ln(closed_form) − log_domain| over [0.001, 100]
const TOLERANCE: f64 = 1e-9;

#[test]
fn test_default_sweep_stays_within_rounding_error() {
    let grid = default_divergence_grid();
    let divergence = log_domain_divergence(&grid).unwrap();

    assert_eq!(divergence.len(), 1000);
    assert_eq!(divergence.grid(), Some(&grid));
    for (z, d) in grid.values().iter().zip(divergence.iter()) {
        assert!(d.is_finite(), "divergence at z={z} is {d}");
        assert!(d.abs() < TOLERANCE, "divergence at z={z} is {d:e}");
    }
}

#[test]
fn test_divergence_does_not_grow_with_z() {
    // Rounding error scales with the magnitude of ln Γ(z), not with any
    // truncation of the series, so the upper half of the sweep stays in
    // the same band as the lower half.
    let low = log_domain_divergence(&Grid::linspace(1.0, 50.0, 200)).unwrap();
    let high = log_domain_divergence(&Grid::linspace(50.0, 100.0, 200)).unwrap();
    assert!(low.max_abs().unwrap() < TOLERANCE);
    assert!(high.max_abs().unwrap() < TOLERANCE);
}

#[test]
fn test_closed_form_tracks_gamma() {
    use statrs::function::gamma::gamma;

    for &z in &[5.0, 10.0, 25.0, 50.0, 100.0] {
        assert_relative_eq!(closed_form(z).unwrap(), gamma(z), max_relative = 1e-6);
    }
    // The shifted form is the one to use near zero
    for &z in &[0.05, 0.3, 0.7] {
        assert_relative_eq!(shifted(z).unwrap(), gamma(z), max_relative = 1e-3);
    }
}

#[test]
fn test_sample_carries_both_forms() {
    let s = sample(3.0).unwrap();
    assert_eq!(s.z, 3.0);
    assert_eq!(s.closed_form, closed_form(3.0).unwrap());
    assert_eq!(s.log_domain, log_domain(3.0).unwrap());
    assert!(s.divergence().abs() < TOLERANCE);
}

proptest! {
    #[test]
    fn prop_log_domain_agrees(z in 0.001..100.0f64) {
        let direct = closed_form(z).unwrap().ln();
        let stable = log_domain(z).unwrap();
        prop_assert!((direct - stable).abs() < TOLERANCE,
            "z={}, ln(closed_form)={}, log_domain={}", z, direct, stable);
    }

    #[test]
    fn prop_non_positive_is_rejected(z in -1.0e6..=0.0f64) {
        prop_assert!(closed_form(z).is_err());
        prop_assert!(log_domain(z).is_err());
    }
}
