//! Fitted model and summary output.
//!
//! ## Purpose
//!
//! This module defines [`PolyRegModel`], the immutable result of a fit, and
//! the read-only operations it answers: prediction, training loss,
//! coefficient access and diagnostics.
//!
//! ## Design notes
//!
//! * **Immutable**: no method takes `&mut self`; every query is a pure read,
//!   so a model can be shared across threads.
//! * **Owned copies**: [`PolyRegModel::para`] hands back a clone of `β`.
//!   [`PolyRegModel::coefficients`] lends a shared reference instead.
//!
//! ## Invariants
//!
//! * `beta` has `design.ncols()` rows and one column.
//! * `design.ncols() == 1 + n_features * degree`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use log::trace;
use nalgebra::DMatrix;

// Internal dependencies
use crate::algorithms::least_squares;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::features::{design_matrix, term_of_column};
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::{PolyRegError, ShapeError};

// ============================================================================
// PolyRegModel
// ============================================================================

/// A trained polynomial regression model.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyRegModel<T: FloatLinalg> {
    pub(crate) degree: usize,
    pub(crate) n_features: usize,
    pub(crate) check_finite: bool,
    /// Augmented training design matrix (bias + expanded features).
    pub(crate) design: DMatrix<T>,
    pub(crate) targets: DMatrix<T>,
    pub(crate) beta: DMatrix<T>,
}

impl<T: FloatLinalg> PolyRegModel<T> {
    // ========================================================================
    // Queries
    // ========================================================================

    /// Predict targets for a k × m feature matrix, returning k × 1.
    pub fn predict(&self, x: &DMatrix<T>) -> Result<DMatrix<T>, PolyRegError> {
        Validator::validate_feature_count(
            x.ncols(),
            self.n_features,
            self.degree,
            self.n_coefficients(),
        )?;
        if self.check_finite {
            Validator::validate_finite(x, "x")?;
        }

        trace!("predicting {} rows", x.nrows());
        let design = design_matrix(x, self.degree);
        Ok(least_squares::predict(&design, &self.beta))
    }

    /// Predict from a flat row-major buffer of `n_features` values per row.
    pub fn predict_slice(&self, x: &[T]) -> Result<Vec<T>, PolyRegError> {
        if self.n_features == 0 {
            return Err(ShapeError::FlatLength {
                len: x.len(),
                dimensions: 0,
            }
            .into());
        }
        let rows = Validator::validate_flat_length(x.len(), self.n_features)?;
        let matrix = DMatrix::from_row_slice(rows, self.n_features, x);
        Ok(self.predict(&matrix)?.iter().copied().collect())
    }

    /// Predict from nested rows.
    ///
    /// No rows yields no predictions, matching a `0 × m` matrix query.
    pub fn predict_rows(&self, rows: &[Vec<T>]) -> Result<Vec<T>, PolyRegError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let m = Validator::validate_rows(rows, "x")?;
        let matrix = DMatrix::from_fn(rows.len(), m, |i, j| rows[i][j]);
        Ok(self.predict(&matrix)?.iter().copied().collect())
    }

    /// Sum of squared residuals on the training data.
    pub fn loss(&self) -> T {
        least_squares::residual_sum_of_squares(&self.design, &self.targets, &self.beta)
    }

    /// Independent copy of the coefficient vector `β`.
    pub fn para(&self) -> DMatrix<T> {
        self.beta.clone()
    }

    /// Borrowed view of `β`.
    pub fn coefficients(&self) -> &DMatrix<T> {
        &self.beta
    }

    /// The bias coefficient `β₀`.
    pub fn intercept(&self) -> T {
        self.beta[(0, 0)]
    }

    /// Fitted values `X · β` on the training data.
    pub fn fitted_values(&self) -> DMatrix<T> {
        least_squares::predict(&self.design, &self.beta)
    }

    /// Training residuals `Y − X · β`.
    pub fn residuals(&self) -> DMatrix<T> {
        least_squares::residuals(&self.design, &self.targets, &self.beta)
    }

    /// In-sample fit statistics.
    pub fn diagnostics(&self) -> Diagnostics<T> {
        let fitted = self.fitted_values();
        Diagnostics::compute(
            self.targets.as_slice(),
            fitted.as_slice(),
            self.n_coefficients(),
        )
    }

    // ========================================================================
    // Shape accessors
    // ========================================================================

    /// Polynomial degree.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of raw feature columns seen at training time.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Augmented width, `1 + n_features * degree`.
    pub fn n_coefficients(&self) -> usize {
        self.design.ncols()
    }

    /// Number of training rows.
    pub fn n_samples(&self) -> usize {
        self.design.nrows()
    }
}

// ============================================================================
// Display
// ============================================================================

fn as_f64<T: FloatLinalg>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T: FloatLinalg> Display for PolyRegModel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:  {}", self.n_samples())?;
        writeln!(f, "  Features:     {}", self.n_features)?;
        writeln!(f, "  Degree:       {}", self.degree)?;
        writeln!(f, "  Coefficients: {}", self.n_coefficients())?;
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        writeln!(f, "  {:>10}  {:>12}", "Term", "Beta")?;
        writeln!(f, "  {}", "-".repeat(24))?;
        for (j, &b) in self.beta.iter().enumerate() {
            match term_of_column(j, self.n_features) {
                Some((feature, power)) => {
                    let label = format!("x{}^{}", feature, power);
                    writeln!(f, "  {:>10}  {:>12.6}", label, as_f64(b))?;
                }
                None => writeln!(f, "  {:>10}  {:>12.6}", "bias", as_f64(b))?,
            }
        }
        writeln!(f)?;

        let diag = self.diagnostics();
        writeln!(f, "Diagnostics:")?;
        writeln!(f, "  Loss (SSR):   {:.6}", as_f64(self.loss()))?;
        writeln!(f, "  RMSE:         {:.6}", as_f64(diag.rmse))?;
        writeln!(f, "  MAE:          {:.6}", as_f64(diag.mae))?;
        writeln!(f, "  R^2:          {:.6}", as_f64(diag.r_squared))?;
        write!(f, "  Residual SD:  {:.6}", as_f64(diag.residual_sd))
    }
}
