//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer computes in-sample statistics describing how well a fitted
//! model reproduces its own training targets.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit quality metrics (RMSE, MAE, R², residual SD).
pub mod diagnostics;
