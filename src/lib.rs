//! # polyreg-rs — Closed-Form Polynomial Regression for Rust
//!
//! A small, self-contained least-squares estimator. Given paired observations
//! (features `X₀`, targets `Y`) it computes the coefficient vector `β` that
//! minimizes the sum of squared residuals, then reuses `β` to predict targets
//! for new feature rows.
//!
//! ## How it works
//!
//! 1. Each feature column is expanded into its elementwise powers
//!    `[x, x², …, x^d]` for the configured degree `d`.
//! 2. A column of ones is prepended so the model can learn an intercept.
//! 3. The coefficients are solved in closed form with the normal equation
//!    `β = (XᵗX)⁻¹ XᵗY`.
//!
//! The expansion is applied per column: a model trained on `m` features with
//! degree `d` always has exactly `1 + m·d` coefficients. No cross-feature
//! interaction terms are generated.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! let x: DMatrix<f64> = DMatrix::from_row_slice(4, 1, &[1.0, 2.0, 3.0, 4.0]);
//! let y: DMatrix<f64> = DMatrix::from_row_slice(4, 1, &[2.0, 4.0, 6.0, 8.0]);
//!
//! // Build the estimator
//! let model = PolyReg::new()
//!     .degree(1)
//!     .build()?
//!     .fit(&x, &y)?;
//!
//! let prediction = model.predict(&DMatrix::from_row_slice(1, 1, &[5.0]))?;
//! assert!((prediction[(0, 0)] - 10.0).abs() < 1e-9);
//!
//! println!("{}", model);
//! # Result::<(), PolyRegError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points:  4
//!   Features:     1
//!   Degree:       1
//!   Coefficients: 2
//!
//! Coefficients:
//!        Term          Beta
//!   ------------------------
//!        bias      0.000000
//!        x1^1      2.000000
//!
//! Diagnostics:
//!   Loss (SSR):   0.000000
//!   RMSE:         0.000000
//!   MAE:          0.000000
//!   R^2:          1.000000
//!   Residual SD:  0.000000
//! ```
//!
//! ## Flat slices
//!
//! Row-major feature buffers can be fitted directly. Configure the number of
//! features per row with `dimensions`:
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! // Two features per row
//! let x = vec![1.0, 0.5, 2.0, 1.5, 3.0, 0.0, 4.0, 2.0, 5.0, 1.0];
//! let y = vec![4.0, 8.0, 7.0, 13.0, 12.0];
//!
//! let model = PolyReg::new().dimensions(2).build()?.fit_slices(&x, &y)?;
//! let fitted = model.predict_slice(&[6.0, 1.0])?;
//! assert_eq!(fitted.len(), 1);
//! # Result::<(), PolyRegError>::Ok(())
//! ```
//!
//! ## Errors
//!
//! Every fallible call returns `Result<_, PolyRegError>`. Shape violations
//! surface as [`PolyRegError::InvalidInputShape`], a non-invertible `XᵗX`
//! as [`PolyRegError::SingularMatrix`]. There is no pseudo-inverse fallback:
//! collinear or under-determined designs fail construction.
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! // Two identical columns
//! let x = DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
//! let y = DMatrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]);
//!
//! let err = PolyRegModel::new(&x, &y, 1).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::SingularMatrix);
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate builds without the standard library (it still needs `alloc`):
//!
//! ```toml
//! [dependencies]
//! polyreg_rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Math - matrix algebra backend and feature construction.
//
// Contains the nalgebra-backed normal-equation solve, the per-column
// polynomial expansion and bias augmentation.
mod math;

// Layer 3: Algorithms - least-squares fitting.
//
// Contains the coefficient solve, prediction and residual loss.
mod algorithms;

// Layer 4: Evaluation - in-sample fit statistics.
mod evaluation;

// Layer 5: Engine - validation and result presentation.
mod engine;

// High-level fluent API.
//
// Provides the `PolyReg` builder and the fitted `PolyRegModel`.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard polyreg prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polyreg_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Diagnostics, ErrorKind, FloatLinalg, PolyRegBuilder as PolyReg, PolyRegError,
        PolyRegModel, PolyRegression, Predictor, ShapeError,
    };
    pub use nalgebra::DMatrix;
}

pub use api::{
    Diagnostics, ErrorKind, FloatLinalg, PolyRegBuilder, PolyRegError, PolyRegModel,
    PolyRegression, Predictor, ShapeError,
};

// ============================================================================
// Internal API
// ============================================================================

/// Internal modules for development and testing.
///
/// This module is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
