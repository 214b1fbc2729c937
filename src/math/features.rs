//! Polynomial feature expansion and bias augmentation.
//!
//! ## Purpose
//!
//! This module turns a raw feature matrix `X₀` (n × m) into the augmented
//! design matrix used by the normal equation.
//!
//! ## Key concepts
//!
//! * **Per-column expansion**: degree `d` produces `[X₀, X₀², …, X₀^d]`,
//!   blocks ordered by power. Powers are elementwise; there are no
//!   interaction terms between columns.
//! * **Bias augmentation**: a constant column of ones is prepended.
//!
//! ## Invariants
//!
//! * Expanded width is `m · d`; augmented width is `1 + m · d`.
//! * Column 0 of an augmented matrix is exactly one.
//! * Degree 1 expansion is the identity.

// External dependencies
use nalgebra::DMatrix;

// Internal dependencies
use crate::math::linalg::FloatLinalg;

/// Width of `X₀` after expansion.
#[inline]
pub const fn expanded_width(n_features: usize, degree: usize) -> usize {
    n_features * degree
}

/// Width of the design matrix after expansion and bias augmentation.
#[inline]
pub const fn augmented_width(n_features: usize, degree: usize) -> usize {
    1 + expanded_width(n_features, degree)
}

/// Map a design-matrix column back to `(feature, power)`.
///
/// Features are 1-based. Column 0 is the bias and returns `None`.
pub fn term_of_column(column: usize, n_features: usize) -> Option<(usize, usize)> {
    if column == 0 || n_features == 0 {
        return None;
    }
    let j = column - 1;
    Some((j % n_features + 1, j / n_features + 1))
}

/// Expand every column of `x` into its powers `1..=degree`.
pub fn polynomial_features<T: FloatLinalg>(x: &DMatrix<T>, degree: usize) -> DMatrix<T> {
    let m = x.ncols();
    DMatrix::from_fn(x.nrows(), expanded_width(m, degree), |i, j| {
        let power = j / m + 1;
        x[(i, j % m)].powi(power as i32)
    })
}

/// Prepend a column of ones.
pub fn add_bias_column<T: FloatLinalg>(x: &DMatrix<T>) -> DMatrix<T> {
    DMatrix::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            T::one()
        } else {
            x[(i, j - 1)]
        }
    })
}

/// Expand and augment in one step, producing the design matrix.
pub fn design_matrix<T: FloatLinalg>(x: &DMatrix<T>, degree: usize) -> DMatrix<T> {
    add_bias_column(&polynomial_features(x, degree))
}
