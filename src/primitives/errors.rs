//! Error types for polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines the error enum returned by the fitting API. The
//! taxonomy is intentionally small: fitting fails only on malformed input
//! shapes, never on numerically degenerate systems (those are resolved by
//! the least-squares solver's minimum-norm answer).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Errors are raised at the API boundary, before any
//!   matrix is allocated.
//! * **no_std**: Implements `core::fmt::Display`; `std::error::Error` is
//!   provided when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * Weight-length mismatches are not errors (weighting is silently
//!   disabled instead; see `algorithms::fitting`).
//! * Rank or conditioning diagnostics are not surfaced.

use core::fmt;

// ============================================================================
// PolyfitError
// ============================================================================

/// Errors that can occur during polynomial fitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyfitError {
    /// One or both input arrays are empty.
    EmptyInput,

    /// Input arrays have different lengths.
    MismatchedInputs {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },

    /// The least-squares backend produced no solution.
    ///
    /// Not reachable through the public API under normal operation: the
    /// QR path falls back to SVD, and the SVD solve cannot fail once the
    /// thin factors are computed.
    SolveFailed,
}

impl fmt::Display for PolyfitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyfitError::EmptyInput => {
                write!(f, "Input arrays are empty")
            }
            PolyfitError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            PolyfitError::SolveFailed => {
                write!(f, "Least-squares solve produced no solution")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolyfitError {}
