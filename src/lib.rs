//! # polyfit-rs — Weighted polynomial least-squares fitting for Rust
//!
//! Fits a polynomial of chosen degree to sample points by weighted least
//! squares, and evaluates fitted polynomials at arbitrary inputs.
//!
//! ## How fitting works
//!
//! Given N samples `(xᵢ, yᵢ)` and a degree d, the fitter builds the
//! N x (d+1) Vandermonde design matrix whose row i is
//! `[1, xᵢ, xᵢ², ..., xᵢᵈ]` and solves `X·c ≈ Y` in the least-squares
//! sense. The solve is delegated to a dense linear-algebra backend
//! (nalgebra) through one of two decompositions:
//!
//! * **Thin SVD** (default) — robust to rank-deficient and ill-conditioned
//!   systems; degenerate inputs yield the minimum-norm solution rather
//!   than an error.
//! * **Column-pivoted QR** — faster, adequate for well-conditioned
//!   full-rank systems; falls back to SVD when its triangular solve
//!   cannot proceed.
//!
//! Optional per-sample weights scale each design-matrix row and target
//! entry by `wᵢ`, so the minimized quantity is `Σ wᵢ² (yᵢ - p(xᵢ))²`.
//! A weight sequence whose length does not match the samples is silently
//! ignored; this fallback is part of the contract, not an accident.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! // y = 2 + 3x, sampled exactly
//! let x: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![2.0, 5.0, 8.0, 11.0, 14.0];
//!
//! let coefficients = fit(&x, &y, 1)?;
//! assert!((coefficients[0] - 2.0).abs() < 1e-6);
//! assert!((coefficients[1] - 3.0).abs() < 1e-6);
//!
//! // Evaluate the fitted polynomial back at the samples
//! let fitted = evaluate(&coefficients, &x);
//! assert!((fitted[2] - 8.0).abs() < 1e-6);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ### Weighted fits and method selection
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![0.1, 0.9, 4.2, 8.8, 16.1, 24.9];
//! let w = vec![1.0, 1.0, 1.0, 1.0, 1.0, 10.0];
//!
//! let coefficients = Polyfit::new()
//!     .degree(2)          // quadratic
//!     .weights(&w)        // pull the fit toward the last sample
//!     .method(ColPivQr)   // QR instead of the default SVD
//!     .fit(&x, &y)?;
//!
//! assert_eq!(coefficients.len(), 3);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ### Result and error handling
//!
//! `fit` returns `Result<Vec<T>, PolyfitError>`. Only malformed input
//! shapes are errors:
//!
//! * empty input arrays ([`PolyfitError::EmptyInput`]);
//! * arrays of different lengths ([`PolyfitError::MismatchedInputs`]).
//!
//! Everything else — too few samples for the requested degree, collinear
//! or duplicated x-values, extreme conditioning — resolves to the
//! solver's best-effort least-squares answer. Callers needing rank
//! diagnostics should inspect their data before fitting.
//!
//! Evaluation cannot fail: [`evaluate`] maps empty
//! x-values to an empty output, an empty coefficient slice to zeros, and
//! lets non-finite values propagate per IEEE 754 rules.
//!
//! ## Precision
//!
//! The API is generic over `f32` and `f64`. All arithmetic within a fit —
//! matrix assembly, decomposition, back-substitution — happens uniformly
//! in the chosen type; `f64` is recommended unless memory is tight.
//!
//! ## Concurrency
//!
//! Both operations are pure functions of their inputs with no global
//! state. Independent calls may run concurrently on separate threads
//! without coordination.
//!
//! ## Minimal usage (no_std / embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polyfit-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - shared fundamental types.
//
// Contains the error enum returned by the fitting API.
mod primitives;

// Layer 2: Math - pure numerical routines.
//
// Contains the least-squares solver abstraction (`FloatLinalg`) over the
// nalgebra backend: thin SVD and column-pivoted QR.
mod math;

// Layer 3: Algorithms - core operations.
//
// Contains the weighted Vandermonde fitting routine and polynomial
// evaluation.
mod algorithms;

// Layer 4: Engine - API-boundary control.
//
// Contains fail-fast input validation.
mod engine;

// Layer 5: API - high-level fluent interface.
//
// Provides the `Polyfit` builder plus `fit`/`evaluate` free functions.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard polyfit prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polyfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        evaluate, fit, PolyfitBuilder as Polyfit, PolyfitError,
        SolveMethod::{ColPivQr, JacobiSvd},
    };
}

pub use crate::api::{evaluate, fit, PolyfitBuilder, PolyfitError, SolveMethod};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal engine utilities.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
