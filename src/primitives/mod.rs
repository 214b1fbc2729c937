//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer holds the types every other layer depends on. For now that is
//! only the error taxonomy.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for fitting and prediction.
pub mod errors;
