//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the two core operations of the crate:
//! - Weighted polynomial least-squares fitting (`fitting`)
//! - Polynomial evaluation at query points (`evaluation`)
//!
//! Neither depends on the other; evaluation is commonly used to validate a
//! fit (residual computation) but stands on its own.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Weighted polynomial least-squares fitting.
pub mod fitting;

/// Polynomial evaluation at query points.
pub mod evaluation;
