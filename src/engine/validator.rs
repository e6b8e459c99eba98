//! Input validation for polynomial fitting.
//!
//! ## Purpose
//!
//! This module validates the sample arrays handed to the fitting API
//! before any matrix is allocated.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Minimal**: Only input shape is checked. Numerically degenerate
//!   data (collinear points, too few samples for the requested degree)
//!   is deliberately not rejected; the least-squares solver resolves it.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not validate weight sequences; a mismatched weight
//!   length disables weighting instead of failing (see
//!   `algorithms::fitting`).
//! * This module does not check for non-finite values; those propagate
//!   through the solve per IEEE 754 rules.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyfitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fitting inputs.
///
/// Provides static methods returning `Result<(), PolyfitError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the sample arrays for a fit.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), PolyfitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(PolyfitError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(PolyfitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Ok(())
    }
}
