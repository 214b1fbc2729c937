//! In-sample fit diagnostics.
//!
//! ## Purpose
//!
//! This module summarizes the training residuals of a fitted model into a
//! handful of scalar metrics.
//!
//! ## Key concepts
//!
//! * **RMSE**: `sqrt(SSR / n)`.
//! * **MAE**: mean absolute residual.
//! * **R²**: `1 - SSR / SST`. A constant target reproduced exactly scores 1,
//!   a constant target with any residual scores 0.
//! * **Residual SD**: `sqrt(SSR / (n - k))` for `k` coefficients; 0 when the
//!   fit has no residual degrees of freedom.
//!
//! ## Non-goals
//!
//! * These are not held-out or generalization metrics.
//! * No cross-validation is performed.

// External dependencies
use num_traits::Float;

/// Fit quality metrics computed on the training data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Residual standard deviation, corrected for fitted coefficients.
    pub residual_sd: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from observed targets and fitted values.
    pub fn compute(observed: &[T], fitted: &[T], n_coefficients: usize) -> Self {
        let n = observed.len();
        if n == 0 {
            return Self {
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::zero(),
                residual_sd: T::zero(),
            };
        }
        let n_t = T::from(n).unwrap_or_else(T::one);

        let mut ssr = T::zero();
        let mut sum_abs = T::zero();
        for (&y, &f) in observed.iter().zip(fitted) {
            let r = y - f;
            ssr = ssr + r * r;
            sum_abs = sum_abs + r.abs();
        }

        let mean = observed.iter().fold(T::zero(), |acc, &y| acc + y) / n_t;
        let sst = observed
            .iter()
            .fold(T::zero(), |acc, &y| acc + (y - mean) * (y - mean));

        let r_squared = if sst > T::zero() {
            T::one() - ssr / sst
        } else if ssr == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        let residual_sd = if n > n_coefficients {
            let dof = T::from(n - n_coefficients).unwrap_or_else(T::one);
            (ssr / dof).sqrt()
        } else {
            T::zero()
        };

        Self {
            rmse: (ssr / n_t).sqrt(),
            mae: sum_abs / n_t,
            r_squared,
            residual_sd,
        }
    }
}
