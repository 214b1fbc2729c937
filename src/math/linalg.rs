//! Linear algebra backend abstraction.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` types to nalgebra, which supplies the
//! matrix product, transpose and inverse used by the normal equation.
//!
//! ## Design notes
//!
//! * The normal matrix `XᵗX` is inverted explicitly. There is no QR, SVD or
//!   pseudo-inverse fallback: a singular system is reported, not repaired.
//! * Rank is checked on the design matrix before inverting. A smallest
//!   singular value at or below `max(n, k) · ε · σ_max` counts as singular.
//! * An inverse containing non-finite entries is treated as singular.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// External dependencies
use core::fmt::Debug;
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Scalar + Debug + Send + Sync {
    /// Solve `β = (XᵗX)⁻¹ XᵗY`, or `None` if `XᵗX` is not invertible.
    fn solve_normal(design: &DMatrix<Self>, targets: &DMatrix<Self>) -> Option<DMatrix<Self>>;
    /// Matrix product `a · b`.
    fn matmul(a: &DMatrix<Self>, b: &DMatrix<Self>) -> DMatrix<Self>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_normal(design: &DMatrix<Self>, targets: &DMatrix<Self>) -> Option<DMatrix<Self>> {
        nalgebra_backend::solve_normal_equations(design, targets)
    }
    #[inline]
    fn matmul(a: &DMatrix<Self>, b: &DMatrix<Self>) -> DMatrix<Self> {
        nalgebra_backend::matmul(a, b)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_normal(design: &DMatrix<Self>, targets: &DMatrix<Self>) -> Option<DMatrix<Self>> {
        nalgebra_backend::solve_normal_equations(design, targets)
    }
    #[inline]
    fn matmul(a: &DMatrix<Self>, b: &DMatrix<Self>) -> DMatrix<Self> {
        nalgebra_backend::matmul(a, b)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use nalgebra::{DMatrix, RealField, SVD};

    /// Solve the normal equation `(XᵗX) β = XᵗY` through an explicit inverse.
    ///
    /// Returns `None` when `design` is numerically rank deficient.
    pub fn solve_normal_equations<T: RealField + Copy>(
        design: &DMatrix<T>,
        targets: &DMatrix<T>,
    ) -> Option<DMatrix<T>> {
        if is_rank_deficient(design) {
            return None;
        }

        let xt = design.transpose();
        let gram = &xt * design;
        let inverse = gram.try_inverse()?;

        if inverse.iter().any(|v| !v.is_finite()) {
            return None;
        }

        Some(inverse * xt * targets)
    }

    /// Whether the columns of `design` are linearly dependent to working precision.
    ///
    /// Fewer rows than columns, or any non-finite entry, is always deficient.
    /// Otherwise the singular values of `design` are compared against
    /// `max(n, k) · ε · σ_max`.
    pub fn is_rank_deficient<T: RealField + Copy>(design: &DMatrix<T>) -> bool {
        let (n, k) = design.shape();
        if n < k {
            return true;
        }
        if k == 0 {
            return false;
        }
        // NaN or infinite entries have no meaningful rank
        if design.iter().any(|v| !v.is_finite()) {
            return true;
        }

        let eps = T::default_epsilon();
        let Some(svd) = SVD::try_new(design.clone(), false, false, eps, 0) else {
            return true;
        };

        let mut lo = svd.singular_values[0];
        let mut hi = lo;
        for &s in svd.singular_values.iter() {
            if s < lo {
                lo = s;
            }
            if s > hi {
                hi = s;
            }
        }

        let scale: T = nalgebra::convert(n.max(k) as f64);
        lo <= scale * eps * hi
    }

    /// Plain matrix product.
    pub fn matmul<T: RealField + Copy>(a: &DMatrix<T>, b: &DMatrix<T>) -> DMatrix<T> {
        a * b
    }
}
