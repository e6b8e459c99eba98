//! Polynomial evaluation at query points.
//!
//! ## Purpose
//!
//! This module evaluates a coefficient vector as a polynomial at a
//! sequence of x-values. It is the natural counterpart to fitting and is
//! typically used for residual computation, but it is agnostic to how the
//! coefficients were produced.
//!
//! ## Design notes
//!
//! * **Accumulation order**: Each term is computed from a running power
//!   (`x_powered` starts at 1 and is multiplied by x per step), matching
//!   the ascending-power coefficient layout and avoiding repeated `powi`
//!   calls. Horner's rule would be an equally valid rewrite with different
//!   floating-point rounding; the ascending order is used consistently.
//! * **Infallible**: There is no failure mode. Non-finite inputs propagate
//!   per IEEE 754 rules rather than being trapped.
//!
//! ## Edge cases
//!
//! * Empty coefficients produce all-zero outputs.
//! * Empty x-values produce an empty output.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate a polynomial at each of the given x-values.
///
/// `coefficients[j]` is the coefficient of `x^j`, the layout produced by
/// the fitting routine. The output has the same length and order as
/// `x_values`.
pub fn evaluate<T: Float>(coefficients: &[T], x_values: &[T]) -> Vec<T> {
    let mut y_values = Vec::with_capacity(x_values.len());

    for &x in x_values {
        let mut y = T::zero();
        let mut x_powered = T::one();
        for &c in coefficients {
            y = y + c * x_powered;
            x_powered = x_powered * x;
        }
        y_values.push(y);
    }

    y_values
}
