//! High-level API for polynomial regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the estimator and the fit methods that
//! produce an immutable [`PolyRegModel`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Fitting is generic over `f32` and `f64`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyRegBuilder`] via `PolyReg::new()`.
//! 2. Chain configuration methods (`.degree()`, `.dimensions()`, ...).
//! 3. Call `.build()` to get a [`PolyRegression`] estimator.
//! 4. Call `.fit(&x, &y)` (or a slice variant) to get a [`PolyRegModel`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use nalgebra::DMatrix;

// Internal dependencies
use crate::engine::executor::{FitConfig, PolyRegExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::PolyRegModel;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::linalg::FloatLinalg;
pub use crate::primitives::errors::{ErrorKind, PolyRegError, ShapeError};

// ============================================================================
// Predictor
// ============================================================================

/// Anything that maps a feature matrix to a column of predictions.
///
/// Lets callers that wire several predictors together treat a fitted
/// regression model as a black box.
pub trait Predictor<T: FloatLinalg> {
    /// Predict one target per row of `x`.
    fn predict(&self, x: &DMatrix<T>) -> Result<DMatrix<T>, PolyRegError>;
}

impl<T: FloatLinalg> Predictor<T> for PolyRegModel<T> {
    fn predict(&self, x: &DMatrix<T>) -> Result<DMatrix<T>, PolyRegError> {
        PolyRegModel::predict(self, x)
    }
}

impl<T: FloatLinalg> PolyRegModel<T> {
    /// Fit a model directly from a training pair with default settings.
    ///
    /// Equivalent to `PolyReg::new().degree(degree).build()?.fit(x, y)`.
    pub fn new(x: &DMatrix<T>, y: &DMatrix<T>, degree: usize) -> Result<Self, PolyRegError> {
        PolyRegExecutor::fit(
            x,
            y,
            FitConfig {
                degree,
                ..FitConfig::default()
            },
        )
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring polynomial regression.
#[derive(Debug, Clone, Default)]
pub struct PolyRegBuilder {
    /// Polynomial degree (default: 1).
    pub degree: Option<usize>,

    /// Features per row for flat-slice input (default: 1).
    pub dimensions: Option<usize>,

    /// Reject NaN and infinite inputs (default: true).
    pub check_finite: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PolyRegBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the polynomial degree.
    ///
    /// - `1` (default): plain linear regression
    /// - `d > 1`: each feature column also contributes `x², …, x^d`
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the number of features per row used by the flat-slice methods.
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        if self.dimensions.is_some() {
            self.duplicate_param = Some("dimensions");
        }
        self.dimensions = Some(dimensions);
        self
    }

    /// Enable or disable the NaN/infinity check on inputs.
    pub fn check_finite(mut self, enabled: bool) -> Self {
        if self.check_finite.is_some() {
            self.duplicate_param = Some("check_finite");
        }
        self.check_finite = Some(enabled);
        self
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<PolyRegression, PolyRegError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let degree = self.degree.unwrap_or(1);
        Validator::validate_degree(degree)?;

        let dimensions = self.dimensions.unwrap_or(1);
        Validator::validate_dimensions(dimensions)?;

        Ok(PolyRegression {
            config: FitConfig {
                degree,
                check_finite: self.check_finite.unwrap_or(true),
            },
            dimensions,
        })
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// A validated, reusable estimator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyRegression {
    config: FitConfig,
    dimensions: usize,
}

impl PolyRegression {
    /// Configured polynomial degree.
    pub fn degree(&self) -> usize {
        self.config.degree
    }

    /// Configured features per row for flat input.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Fit on a feature matrix `x` (n × m) and target matrix `y` (n × 1).
    pub fn fit<T: FloatLinalg>(
        &self,
        x: &DMatrix<T>,
        y: &DMatrix<T>,
    ) -> Result<PolyRegModel<T>, PolyRegError> {
        PolyRegExecutor::fit(x, y, self.config)
    }

    /// Fit on a flat row-major feature buffer and one target per row.
    ///
    /// `x` must hold `y.len() * dimensions` values.
    pub fn fit_slices<T: FloatLinalg>(
        &self,
        x: &[T],
        y: &[T],
    ) -> Result<PolyRegModel<T>, PolyRegError> {
        let rows = Validator::validate_flat_length(x.len(), self.dimensions)?;
        if rows != y.len() {
            return Err(ShapeError::MismatchedRows {
                x_rows: rows,
                y_rows: y.len(),
            }
            .into());
        }

        let features = DMatrix::from_row_slice(rows, self.dimensions, x);
        let targets = DMatrix::from_column_slice(y.len(), 1, y);
        self.fit(&features, &targets)
    }

    /// Fit on nested feature rows and one target per row.
    pub fn fit_rows<T: FloatLinalg>(
        &self,
        x: &[Vec<T>],
        y: &[T],
    ) -> Result<PolyRegModel<T>, PolyRegError> {
        let m = Validator::validate_rows(x, "x")?;
        let features = DMatrix::from_fn(x.len(), m, |i, j| x[i][j]);
        let targets = DMatrix::from_column_slice(y.len(), 1, y);
        self.fit(&features, &targets)
    }
}
