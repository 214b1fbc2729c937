//! Error types for polynomial regression.
//!
//! ## Purpose
//!
//! This module defines the closed set of failures the estimator can report.
//! Shape problems are grouped under [`ShapeError`] so callers can match on
//! "the input was malformed" without caring which dimension was wrong.
//!
//! ## Key concepts
//!
//! * **Shape errors**: raised at construction or prediction when the
//!   dimensionality, column count or row count of an input is wrong.
//! * **Singular matrix**: raised when `XᵗX` cannot be inverted. Fatal to
//!   construction, never retried.
//! * **Parameter errors**: raised by the builder for invalid configuration.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// ============================================================================
// Shape Errors
// ============================================================================

/// Violations of the shape contract for training or prediction inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// Nested rows of unequal length: the input is not a rank-2 matrix.
    #[error("{input} must be a 2-dimensional array: row {row} has {got} columns, expected {expected}")]
    NotTwoDimensional {
        /// Which input was malformed (`"x"` or `"y"`).
        input: &'static str,
        /// Index of the first offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },

    /// The target matrix does not have exactly one column.
    #[error("y must have exactly one column, got {got}")]
    TargetColumns {
        /// Number of columns supplied.
        got: usize,
    },

    /// Feature and target matrices disagree on the number of observations.
    #[error("Row mismatch: x has {x_rows} rows, y has {y_rows}")]
    MismatchedRows {
        /// Rows in the feature matrix.
        x_rows: usize,
        /// Rows in the target matrix.
        y_rows: usize,
    },

    /// Prediction input has a different number of features than the training data.
    #[error("x must have {expected} features, got {got}")]
    FeatureCount {
        /// Feature count seen at training time.
        expected: usize,
        /// Feature count supplied.
        got: usize,
    },

    /// A flat row-major buffer cannot be split into rows of `dimensions` values.
    #[error("Flat buffer of length {len} is not a multiple of dimensions {dimensions}")]
    FlatLength {
        /// Buffer length.
        len: usize,
        /// Configured features per row.
        dimensions: usize,
    },
}

// ============================================================================
// PolyRegError
// ============================================================================

/// Errors returned by fitting, prediction and builder validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolyRegError {
    /// Input dimensionality, column count or row count is invalid.
    #[error("Invalid input shape: {0}")]
    InvalidInputShape(#[from] ShapeError),

    /// `XᵗX` is not invertible.
    ///
    /// Usually the degree is too high for the number of samples, or two
    /// expanded columns are collinear.
    #[error("Design matrix (X^T X) is singular and cannot be inverted [n: {n}, k: {k}]")]
    SingularMatrix {
        /// Number of training rows.
        n: usize,
        /// Number of augmented feature columns.
        k: usize,
    },

    /// Polynomial degree must be at least 1.
    #[error("Invalid degree: {0} (must be >= 1)")]
    InvalidDegree(usize),

    /// Feature count for flat input must be at least 1.
    #[error("Invalid dimensions: {0} (must be >= 1)")]
    InvalidDimensions(usize),

    /// An input contained NaN or an infinite value.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A builder parameter was configured more than once.
    #[error("Parameter '{parameter}' was set multiple times. Each parameter can only be configured once.")]
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of [`PolyRegError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed training or prediction input.
    InvalidInputShape,

    /// Non-invertible normal matrix.
    SingularMatrix,

    /// Invalid builder configuration or non-finite input values.
    InvalidParameter,
}

impl PolyRegError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PolyRegError::InvalidInputShape(_) => ErrorKind::InvalidInputShape,
            PolyRegError::SingularMatrix { .. } => ErrorKind::SingularMatrix,
            PolyRegError::InvalidDegree(_)
            | PolyRegError::InvalidDimensions(_)
            | PolyRegError::InvalidNumericValue(_)
            | PolyRegError::DuplicateParameter { .. } => ErrorKind::InvalidParameter,
        }
    }
}
