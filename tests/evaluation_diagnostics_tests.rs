#![cfg(feature = "dev")]
//! Tests for in-sample diagnostics.
//!
//! ## Test Organization
//!
//! 1. **Exact Fits** - Zero error metrics
//! 2. **Hand-Computed** - Known residual sets
//! 3. **Edge Cases** - Constant targets, empty input, no degrees of freedom

use approx::assert_relative_eq;

use polyreg_rs::internals::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Exact Fits
// ============================================================================

#[test]
fn test_perfect_fit() {
    let y = [1.0, 2.0, 3.0, 4.0];
    let d = Diagnostics::compute(&y, &y, 2);

    assert_relative_eq!(d.rmse, 0.0);
    assert_relative_eq!(d.mae, 0.0);
    assert_relative_eq!(d.r_squared, 1.0);
    assert_relative_eq!(d.residual_sd, 0.0);
}

// ============================================================================
// Hand-Computed
// ============================================================================

#[test]
fn test_known_residuals() {
    // Residuals: [1, -1, 1, -1], SSR = 4
    // Mean of y = 2.5, SST = 2.25 + 0.25 + 0.25 + 2.25 = 5
    let y = [1.0, 2.0, 3.0, 4.0];
    let fitted = [0.0, 3.0, 2.0, 5.0];
    let d = Diagnostics::compute(&y, &fitted, 2);

    assert_relative_eq!(d.rmse, 1.0);
    assert_relative_eq!(d.mae, 1.0);
    assert_relative_eq!(d.r_squared, 1.0 - 4.0 / 5.0, epsilon = 1e-12);
    // sqrt(4 / (4 - 2))
    assert_relative_eq!(d.residual_sd, 2.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_f32_diagnostics() {
    let y = [2.0_f32, 4.0, 6.0];
    let fitted = [2.0_f32, 4.0, 7.0];
    let d = Diagnostics::compute(&y, &fitted, 1);

    assert_relative_eq!(d.mae, 1.0 / 3.0, epsilon = 1e-6);
    assert_relative_eq!(d.rmse, (1.0_f32 / 3.0).sqrt(), epsilon = 1e-6);
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Constant targets: R² is 1 only when reproduced exactly.
#[test]
fn test_constant_targets() {
    let y = [5.0, 5.0, 5.0];

    let exact = Diagnostics::compute(&y, &[5.0, 5.0, 5.0], 1);
    assert_relative_eq!(exact.r_squared, 1.0);

    let off = Diagnostics::compute(&y, &[5.0, 5.0, 6.0], 1);
    assert_relative_eq!(off.r_squared, 0.0);
}

#[test]
fn test_empty_input() {
    let d = Diagnostics::<f64>::compute(&[], &[], 1);
    assert_relative_eq!(d.rmse, 0.0);
    assert_relative_eq!(d.r_squared, 0.0);
}

/// As many coefficients as points leaves no residual degrees of freedom.
#[test]
fn test_no_degrees_of_freedom() {
    let d = Diagnostics::compute(&[1.0, 2.0], &[1.5, 1.5], 2);
    assert_relative_eq!(d.residual_sd, 0.0);
    assert!(d.rmse > 0.0);
}
