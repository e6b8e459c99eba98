//! Linear algebra backend abstraction for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense
//! least-squares solves used by the fitter, standardizing on the
//! optimized nalgebra backend.
//!
//! ## Design notes
//!
//! * Two decompositions are exposed: thin SVD (robust to rank-deficient
//!   or ill-conditioned systems, handles any matrix shape) and
//!   column-pivoted QR (faster on well-conditioned full-rank systems).
//! * The QR path falls back to SVD when the triangular solve cannot
//!   proceed (underdetermined or rank-deficient systems), so callers
//!   always receive a best-effort minimum-norm answer.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to
//!   monomorphic nalgebra routines; precision is never mixed within a
//!   solve.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the optimized nalgebra backend.
///
/// Both methods solve `A * c ≈ b` in the least-squares sense for an
/// `rows x cols` matrix `A` given in row-major order, returning a solution
/// of length `cols`.
pub trait FloatLinalg: Float + 'static {
    /// Least-squares solve via thin singular value decomposition.
    fn solve_svd(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>>;

    /// Least-squares solve via column-pivoted QR, with SVD fallback.
    fn solve_col_piv_qr(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_svd(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_svd_f64(design, rhs, rows, cols)
    }
    #[inline]
    fn solve_col_piv_qr(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_col_piv_qr_f64(design, rhs, rows, cols)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_svd(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_svd_f32(design, rhs, rows, cols)
    }
    #[inline]
    fn solve_col_piv_qr(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_col_piv_qr_f32(design, rhs, rows, cols)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based least-squares operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve `A * c ≈ b` via thin SVD using f64 precision.
    pub fn solve_svd_f64(
        design: &[f64],
        rhs: &[f64],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        matrix
            .svd(true, true)
            .solve(&b, f64::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Solve `A * c ≈ b` via column-pivoted QR using f64 precision.
    ///
    /// Underdetermined systems (rows < cols) and systems whose triangular
    /// factor is singular are handed off to the SVD path.
    pub fn solve_col_piv_qr_f64(
        design: &[f64],
        rhs: &[f64],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        if rows >= cols {
            let qr = matrix.clone().col_piv_qr();
            // A*P = Q*R, so c = P * solve(R, Qᵀb)
            let mut z = qr.q().transpose() * &b;
            if qr.r().solve_upper_triangular_mut(&mut z) {
                qr.p().inv_permute_rows(&mut z);
                if z.iter().all(|v| v.is_finite()) {
                    return Some(z.as_slice().to_vec());
                }
            }
        }

        matrix
            .svd(true, true)
            .solve(&b, f64::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Solve `A * c ≈ b` via thin SVD using f32 precision.
    pub fn solve_svd_f32(
        design: &[f32],
        rhs: &[f32],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        matrix
            .svd(true, true)
            .solve(&b, f32::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }

    /// Solve `A * c ≈ b` via column-pivoted QR using f32 precision.
    ///
    /// Underdetermined systems (rows < cols) and systems whose triangular
    /// factor is singular are handed off to the SVD path.
    pub fn solve_col_piv_qr_f32(
        design: &[f32],
        rhs: &[f32],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        if rows >= cols {
            let qr = matrix.clone().col_piv_qr();
            // A*P = Q*R, so c = P * solve(R, Qᵀb)
            let mut z = qr.q().transpose() * &b;
            if qr.r().solve_upper_triangular_mut(&mut z) {
                qr.p().inv_permute_rows(&mut z);
                if z.iter().all(|v| v.is_finite()) {
                    return Some(z.as_slice().to_vec());
                }
            }
        }

        matrix
            .svd(true, true)
            .solve(&b, f32::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }
}
