//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer guards the boundary between the public API and the
//! algorithms:
//! - Fail-fast validation of fitting inputs (`validator`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast input validation.
pub mod validator;
