//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements ordinary least squares on an augmented design
//! matrix: the closed-form coefficient solve, prediction and the in-sample
//! residual loss.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Normal-equation least squares.
pub mod least_squares;
