//! High-level API for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring a fit (degree, weights, solve method) and free
//! functions for the common unweighted cases.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters (degree 1, no weights, SVD solve).
//! * **Type-Safe**: Generic over `FloatLinalg` types for flexible
//!   precision (f32 or f64).
//! * **Validated**: Input shapes are validated when `.fit()` is called.
//!
//! ### Configuration flow
//!
//! 1. Create a [`PolyfitBuilder`] via `Polyfit::new()`.
//! 2. Chain configuration methods (`.degree()`, `.weights()`, `.method()`).
//! 3. Call `.fit(&x, &y)` to obtain the coefficients.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// Internal dependencies
use crate::algorithms::fitting::fit_polynomial;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::evaluation::evaluate;
pub use crate::algorithms::fitting::SolveMethod;
pub use crate::primitives::errors::PolyfitError;

// ============================================================================
// Polyfit Builder
// ============================================================================

/// Fluent builder for configuring a polynomial fit.
///
/// # Examples
///
/// ```
/// use polyfit_rs::prelude::*;
///
/// let x: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = vec![2.0, 5.0, 8.0, 11.0, 14.0];
///
/// let coefficients = Polyfit::new()
///     .degree(1)
///     .method(JacobiSvd)
///     .fit(&x, &y)?;
///
/// assert!((coefficients[0] - 2.0).abs() < 1e-6);
/// assert!((coefficients[1] - 3.0).abs() < 1e-6);
/// # Result::<(), PolyfitError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct PolyfitBuilder<T: FloatLinalg + Debug> {
    /// Polynomial degree (default: 1).
    pub degree: Option<usize>,

    /// Per-sample weights (default: none).
    pub weights: Option<Vec<T>>,

    /// Least-squares solve method (default: JacobiSvd).
    pub method: Option<SolveMethod>,
}

impl<T: FloatLinalg + Debug> Default for PolyfitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + Debug> PolyfitBuilder<T> {
    /// Create a builder with all parameters at their defaults.
    pub fn new() -> Self {
        Self {
            degree: None,
            weights: None,
            method: None,
        }
    }

    /// Set the polynomial degree (number of coefficients is `degree + 1`).
    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = Some(degree);
        self
    }

    /// Set per-sample weights.
    ///
    /// Weights are used only when their length matches the sample arrays
    /// at fit time; any other length silently disables weighting. A weight
    /// `wᵢ` scales sample i's whole design-matrix row and target entry, so
    /// the fit minimizes `Σ wᵢ² (yᵢ - p(xᵢ))²`.
    pub fn weights(mut self, weights: &[T]) -> Self {
        self.weights = Some(weights.to_vec());
        self
    }

    /// Set the least-squares solve method.
    pub fn method(mut self, method: SolveMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Fit a polynomial to the sample points.
    ///
    /// Returns the coefficients in ascending power order: index j holds
    /// the coefficient of `x^j`.
    ///
    /// # Errors
    ///
    /// * [`PolyfitError::EmptyInput`] if either input is empty.
    /// * [`PolyfitError::MismatchedInputs`] if the inputs differ in length.
    pub fn fit(&self, x_values: &[T], y_values: &[T]) -> Result<Vec<T>, PolyfitError> {
        let degree = self.degree.unwrap_or(1);
        let method = self.method.unwrap_or_default();
        let weights = self.weights.as_deref().unwrap_or(&[]);

        fit_polynomial(x_values, y_values, degree, weights, method)
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Fit a polynomial of the given degree, unweighted, with the default
/// SVD solve.
///
/// Equivalent to `Polyfit::new().degree(degree).fit(x_values, y_values)`.
///
/// # Errors
///
/// * [`PolyfitError::EmptyInput`] if either input is empty.
/// * [`PolyfitError::MismatchedInputs`] if the inputs differ in length.
pub fn fit<T: FloatLinalg>(
    x_values: &[T],
    y_values: &[T],
    degree: usize,
) -> Result<Vec<T>, PolyfitError> {
    fit_polynomial(x_values, y_values, degree, &[], SolveMethod::default())
}
