//! Weighted polynomial least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides the core fitting algorithm: assembling the
//! (optionally weighted) Vandermonde design matrix from the sample points
//! and solving the resulting overdetermined system for the polynomial
//! coefficients.
//!
//! ## Design notes
//!
//! * **Algorithm**: Builds `X·c ≈ Y` where row i of `X` holds the
//!   ascending powers `[1, xᵢ, xᵢ², ..., xᵢᵈ]` and delegates the solve to
//!   the `FloatLinalg` backend.
//! * **Weights**: When active, every entry of row i *and* `Y[i]` is scaled
//!   by `wᵢ`, so the solve minimizes `Σ wᵢ² (yᵢ - p(xᵢ))²`.
//! * **Fallback**: A weight sequence whose length does not match the
//!   samples silently disables weighting rather than raising an error.
//! * **Generics**: Generic over `FloatLinalg` types.
//!
//! ## Key concepts
//!
//! * **Vandermonde Matrix**: Rows of ascending powers of x, expressing
//!   polynomial evaluation as a linear map over coefficients.
//! * **Least Squares**: Minimizes the sum of squared residuals; tolerates
//!   rank deficiency by returning the solver's minimum-norm answer.
//!
//! ## Invariants
//!
//! * The returned coefficient vector has length `degree + 1`, index j
//!   holding the coefficient of `x^j`.
//! * Inputs are never mutated; each call owns its temporaries.
//!
//! ## Non-goals
//!
//! * This module does not reject underdetermined systems.
//! * This module does not surface rank or conditioning diagnostics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Solve Method
// ============================================================================

/// Decomposition used for the least-squares solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveMethod {
    /// Thin SVD least squares (default).
    ///
    /// Robust to rank-deficient and ill-conditioned design matrices;
    /// returns the minimum-norm solution for degenerate systems.
    #[default]
    JacobiSvd,

    /// Column-pivoted QR least squares.
    ///
    /// Faster than SVD and adequate when the design matrix is
    /// well-conditioned with full column rank.
    ColPivQr,
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit a polynomial of the given degree to the sample points.
///
/// Solves `X·c ≈ Y` in the least-squares sense, where `X` is the N x (d+1)
/// Vandermonde matrix of the x-values. The returned coefficients are in
/// ascending power order: index j holds the coefficient of `x^j`.
///
/// Weighting is active only when `weights` is non-empty and exactly as long
/// as the samples; any other length silently disables it. An active weight
/// `wᵢ` scales the whole of row i and `Y[i]`, so the minimized quantity is
/// `Σ wᵢ² (yᵢ - p(xᵢ))²`.
///
/// # Errors
///
/// * [`PolyfitError::EmptyInput`] if either input is empty.
/// * [`PolyfitError::MismatchedInputs`] if the inputs differ in length.
///
/// Degenerate systems are not errors: callers asking for more coefficients
/// than there are samples, or supplying collinear data, receive the
/// solver's best-effort minimum-norm answer.
pub fn fit_polynomial<T: FloatLinalg>(
    x_values: &[T],
    y_values: &[T],
    degree: usize,
    weights: &[T],
    method: SolveMethod,
) -> Result<Vec<T>, PolyfitError> {
    Validator::validate_inputs(x_values, y_values)?;

    let n_count = x_values.len();
    let n_coefficients = degree + 1;
    let use_weights = !weights.is_empty() && weights.len() == n_count;

    // Target vector Y
    let mut rhs = Vec::with_capacity(n_count);
    for i in 0..n_count {
        if use_weights {
            rhs.push(y_values[i] * weights[i]);
        } else {
            rhs.push(y_values[i]);
        }
    }

    // Design matrix X (Vandermonde), row-major
    let mut design = Vec::with_capacity(n_count * n_coefficients);
    for i in 0..n_count {
        let mut value = T::one();
        for _ in 0..n_coefficients {
            if use_weights {
                design.push(value * weights[i]);
            } else {
                design.push(value);
            }
            value = value * x_values[i];
        }
    }

    let solution = match method {
        SolveMethod::JacobiSvd => T::solve_svd(&design, &rhs, n_count, n_coefficients),
        SolveMethod::ColPivQr => T::solve_col_piv_qr(&design, &rhs, n_count, n_coefficients),
    };

    let mut coefficients = solution.ok_or(PolyfitError::SolveFailed)?;
    coefficients.truncate(n_coefficients);
    Ok(coefficients)
}
