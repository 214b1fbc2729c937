//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numeric building blocks of the estimator:
//! - The nalgebra-backed matrix algebra (product, transpose, inverse)
//! - Polynomial feature expansion and bias augmentation
//!
//! These are reusable pieces with no knowledge of builders or validation.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend (nalgebra).
pub mod linalg;

/// Polynomial expansion and design-matrix construction.
pub mod features;
