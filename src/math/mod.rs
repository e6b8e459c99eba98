//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical building blocks used by the fitting
//! algorithms:
//! - Dense least-squares solvers (SVD and column-pivoted QR) behind the
//!   `FloatLinalg` trait
//!
//! These are reusable mathematical routines with no fitting-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares solver abstraction over the nalgebra backend.
pub mod linalg;
