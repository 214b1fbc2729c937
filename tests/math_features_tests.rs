#![cfg(feature = "dev")]
//! Tests for polynomial feature expansion and bias augmentation.
//!
//! These tests verify the design-matrix construction used before every
//! normal-equation solve:
//! - Per-column power expansion (no interaction terms)
//! - Bias column prepending
//! - Width bookkeeping and column-to-term mapping
//!
//! ## Test Organization
//!
//! 1. **Expansion** - Powers of single and multiple columns
//! 2. **Augmentation** - Bias column and combined design matrix
//! 3. **Bookkeeping** - Widths and term labels

use approx::assert_relative_eq;
use nalgebra::DMatrix;

use polyreg_rs::internals::math::features::{
    add_bias_column, augmented_width, design_matrix, expanded_width, polynomial_features,
    term_of_column,
};

// ============================================================================
// Expansion Tests
// ============================================================================

/// A single column expands to [x, x², …, x^d] by direct recomputation.
#[test]
fn test_single_column_powers() {
    let values = [-2.0, -0.5, 0.0, 1.5, 3.0];
    let x = DMatrix::from_column_slice(values.len(), 1, &values);

    for degree in 1..=5 {
        let expanded = polynomial_features(&x, degree);
        assert_eq!(expanded.shape(), (values.len(), degree));

        for (i, &v) in values.iter().enumerate() {
            let mut power = 1.0;
            for p in 0..degree {
                power *= v;
                assert_relative_eq!(expanded[(i, p)], power, epsilon = 1e-12);
            }
        }
    }
}

/// Degree 1 is the identity.
#[test]
fn test_degree_one_is_identity() {
    let x = DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(polynomial_features(&x, 1), x);
}

/// Blocks are ordered by power; no cross terms appear.
#[test]
fn test_multi_column_block_order() {
    // Row: x1 = 2, x2 = 3
    let x = DMatrix::from_row_slice(1, 2, &[2.0, 3.0]);
    let expanded = polynomial_features(&x, 3);

    // [x1, x2, x1², x2², x1³, x2³]
    let expected = [2.0, 3.0, 4.0, 9.0, 8.0, 27.0];
    assert_eq!(expanded.ncols(), expected.len());
    for (j, &e) in expected.iter().enumerate() {
        assert_relative_eq!(expanded[(0, j)], e);
    }

    // x1·x2 = 6 must not be among the columns
    assert!(expanded.iter().all(|&v| v != 6.0));
}

/// Zero rows survive expansion.
#[test]
fn test_empty_rows() {
    let x: DMatrix<f64> = DMatrix::zeros(0, 2);
    let expanded = polynomial_features(&x, 2);
    assert_eq!(expanded.shape(), (0, 4));
}

// ============================================================================
// Augmentation Tests
// ============================================================================

/// The bias column is a column of ones placed first.
#[test]
fn test_add_bias_column() {
    let x = DMatrix::from_row_slice(2, 2, &[5.0, 6.0, 7.0, 8.0]);
    let augmented = add_bias_column(&x);

    assert_eq!(augmented.shape(), (2, 3));
    assert_eq!(augmented.column(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 1.0]);
    assert_eq!(augmented[(0, 1)], 5.0);
    assert_eq!(augmented[(1, 2)], 8.0);
}

/// The design matrix has width 1 + m·d with a leading ones column.
#[test]
fn test_design_matrix_shape() {
    let x = DMatrix::from_row_slice(4, 3, &[1.0; 12]);
    for degree in 1..=4 {
        let design = design_matrix(&x, degree);
        assert_eq!(design.ncols(), 1 + 3 * degree);
        assert!(design.column(0).iter().all(|&v| v == 1.0));
    }
}

/// Single precision expansion.
#[test]
fn test_f32_expansion() {
    let x = DMatrix::from_column_slice(2, 1, &[2.0_f32, 3.0]);
    let design = design_matrix(&x, 2);
    assert_eq!(design, DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 4.0, 1.0, 3.0, 9.0]));
}

// ============================================================================
// Bookkeeping Tests
// ============================================================================

#[test]
fn test_widths() {
    assert_eq!(expanded_width(3, 2), 6);
    assert_eq!(augmented_width(3, 2), 7);
    assert_eq!(augmented_width(0, 5), 1);
}

/// Columns map back to (feature, power), 1-based.
#[test]
fn test_term_of_column() {
    assert_eq!(term_of_column(0, 2), None);
    assert_eq!(term_of_column(1, 2), Some((1, 1)));
    assert_eq!(term_of_column(2, 2), Some((2, 1)));
    assert_eq!(term_of_column(3, 2), Some((1, 2)));
    assert_eq!(term_of_column(6, 2), Some((2, 3)));
    assert_eq!(term_of_column(1, 0), None);
}
