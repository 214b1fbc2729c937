//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit: it validates configuration and input
//! shapes before any numeric work happens, runs the pipeline, and owns the
//! fitted model type together with its display formatting.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and configuration validation.
pub mod validator;

/// Fit pipeline.
pub mod executor;

/// Fitted model and its summary output.
pub mod output;
