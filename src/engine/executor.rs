//! Fit orchestration.
//!
//! ## Purpose
//!
//! This module runs the construction pipeline: validate the training pair,
//! build the design matrix, solve for the coefficients and package the
//! result into an immutable [`PolyRegModel`].
//!
//! ## Design notes
//!
//! * **All or nothing**: a model value only exists once every step has
//!   succeeded; errors leave nothing behind.
//! * **Owned snapshot**: the model keeps its own copies of the design
//!   matrix, targets and coefficients.
//!
//! ## Non-goals
//!
//! * No retraining, incremental updates or warm starts.

// External dependencies
use log::{debug, trace};
use nalgebra::DMatrix;

// Internal dependencies
use crate::algorithms::least_squares;
use crate::engine::output::PolyRegModel;
use crate::engine::validator::Validator;
use crate::math::features::design_matrix;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::PolyRegError;

/// Configuration for a single fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitConfig {
    /// Polynomial degree (>= 1).
    pub degree: usize,

    /// Reject NaN and infinite inputs.
    pub check_finite: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            degree: 1,
            check_finite: true,
        }
    }
}

/// Runs the fit pipeline for a validated configuration.
pub struct PolyRegExecutor;

impl PolyRegExecutor {
    /// Fit a model on `x` (n × m) and `y` (n × 1).
    pub fn fit<T: FloatLinalg>(
        x: &DMatrix<T>,
        y: &DMatrix<T>,
        config: FitConfig,
    ) -> Result<PolyRegModel<T>, PolyRegError> {
        Validator::validate_degree(config.degree)?;
        Validator::validate_training_shapes(x, y)?;
        if config.check_finite {
            Validator::validate_finite(x, "x")?;
            Validator::validate_finite(y, "y")?;
        }

        let design = design_matrix(x, config.degree);
        debug!(
            "fitting degree {} on {} rows x {} features, design {}x{}",
            config.degree,
            x.nrows(),
            x.ncols(),
            design.nrows(),
            design.ncols()
        );

        let beta = least_squares::solve(&design, y)?;
        trace!("solved coefficients: {:?}", beta.as_slice());

        Ok(PolyRegModel {
            degree: config.degree,
            n_features: x.ncols(),
            check_finite: config.check_finite,
            design,
            targets: y.clone(),
            beta,
        })
    }
}
