//! Ordinary least squares via the normal equation.
//!
//! ## Purpose
//!
//! This module solves `β = (XᵗX)⁻¹ XᵗY` for an already augmented design
//! matrix `X`, and evaluates predictions and residuals against a solved `β`.
//!
//! ## Design notes
//!
//! * **Closed form**: one explicit inverse, no iteration.
//! * **Rank checked**: fewer rows than columns, or numerically dependent
//!   columns, make `XᵗX` singular.
//! * **No fallback**: a singular `XᵗX` is reported as
//!   [`PolyRegError::SingularMatrix`]; no ridge term or pseudo-inverse is
//!   substituted.
//! * **Generics**: Generic over `FloatLinalg` types.
//!
//! ## Invariants
//!
//! * `β` has one row per design column and exactly one column.
//! * The residual sum of squares is never negative.
//!
//! ## Non-goals
//!
//! * This module does not expand features or prepend the bias column.
//! * This module does not validate shapes (handled by engine).

// External dependencies
use nalgebra::DMatrix;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::PolyRegError;

/// Solve the normal equation for `β`.
pub fn solve<T: FloatLinalg>(
    design: &DMatrix<T>,
    targets: &DMatrix<T>,
) -> Result<DMatrix<T>, PolyRegError> {
    let singular = PolyRegError::SingularMatrix {
        n: design.nrows(),
        k: design.ncols(),
    };

    // More coefficients than observations
    if design.nrows() < design.ncols() {
        return Err(singular);
    }

    T::solve_normal(design, targets).ok_or(singular)
}

/// Evaluate `X · β`.
#[inline]
pub fn predict<T: FloatLinalg>(design: &DMatrix<T>, beta: &DMatrix<T>) -> DMatrix<T> {
    T::matmul(design, beta)
}

/// Residuals `Y − X · β`, one per row.
pub fn residuals<T: FloatLinalg>(
    design: &DMatrix<T>,
    targets: &DMatrix<T>,
    beta: &DMatrix<T>,
) -> DMatrix<T> {
    let fitted = predict(design, beta);
    targets.zip_map(&fitted, |observed, estimate| observed - estimate)
}

/// Sum of squared residuals over the rows of `design`.
pub fn residual_sum_of_squares<T: FloatLinalg>(
    design: &DMatrix<T>,
    targets: &DMatrix<T>,
    beta: &DMatrix<T>,
) -> T {
    residuals(design, targets, beta)
        .iter()
        .fold(T::zero(), |acc, &r| acc + r * r)
}
