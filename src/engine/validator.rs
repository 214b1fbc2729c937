//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module checks builder parameters and the shapes of training and
//! prediction inputs before any matrix is built or inverted.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Training checks run in a fixed order: y column count,
//!   then row agreement.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair input data.
//! * This module does not detect singular designs (handled by algorithms).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use nalgebra::DMatrix;
use num_traits::Float;

// Internal dependencies
use crate::math::features::expanded_width;
use crate::primitives::errors::{PolyRegError, ShapeError};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
///
/// All methods return `Result<_, PolyRegError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate a training pair.
    pub fn validate_training_shapes<T: Float + nalgebra::Scalar>(
        x: &DMatrix<T>,
        y: &DMatrix<T>,
    ) -> Result<(), PolyRegError> {
        if y.ncols() != 1 {
            return Err(ShapeError::TargetColumns { got: y.ncols() }.into());
        }

        if x.nrows() != y.nrows() {
            return Err(ShapeError::MismatchedRows {
                x_rows: x.nrows(),
                y_rows: y.nrows(),
            }
            .into());
        }

        Ok(())
    }

    /// Validate that nested rows form a rectangle, returning the column count.
    ///
    /// An empty slice has zero columns.
    pub fn validate_rows<T>(rows: &[Vec<T>], input: &'static str) -> Result<usize, PolyRegError> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(ShapeError::NotTwoDimensional {
                input,
                row,
                expected,
                got: r.len(),
            }
            .into());
        }
        Ok(expected)
    }

    /// Validate a flat row-major buffer, returning the number of rows.
    pub fn validate_flat_length(len: usize, dimensions: usize) -> Result<usize, PolyRegError> {
        Self::validate_dimensions(dimensions)?;
        if len % dimensions != 0 {
            return Err(ShapeError::FlatLength { len, dimensions }.into());
        }
        Ok(len / dimensions)
    }

    /// Validate a prediction input against the trained design width.
    ///
    /// The expanded width of the query must equal the trained augmented
    /// width minus the bias column.
    pub fn validate_feature_count(
        got: usize,
        expected: usize,
        degree: usize,
        n_coefficients: usize,
    ) -> Result<(), PolyRegError> {
        if expanded_width(got, degree) + 1 != n_coefficients {
            return Err(ShapeError::FeatureCount { expected, got }.into());
        }
        Ok(())
    }

    /// Validate that every entry of a matrix is finite.
    pub fn validate_finite<T: Float + nalgebra::Scalar>(
        values: &DMatrix<T>,
        name: &str,
    ) -> Result<(), PolyRegError> {
        let rows = values.nrows().max(1);
        if let Some((idx, &val)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PolyRegError::InvalidNumericValue(format!(
                "{}[{}, {}]={}",
                name,
                idx % rows,
                idx / rows,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the polynomial degree.
    pub fn validate_degree(degree: usize) -> Result<(), PolyRegError> {
        if degree == 0 {
            return Err(PolyRegError::InvalidDegree(degree));
        }
        Ok(())
    }

    /// Validate the number of features per row for flat inputs.
    pub fn validate_dimensions(dimensions: usize) -> Result<(), PolyRegError> {
        if dimensions == 0 {
            return Err(PolyRegError::InvalidDimensions(dimensions));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), PolyRegError> {
        if let Some(param) = duplicate_param {
            return Err(PolyRegError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
