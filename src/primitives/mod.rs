//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides fundamental types shared by every other layer:
//! - Error types for the fitting API
//!
//! These carry no numerical logic of their own.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for the fitting API.
pub mod errors;
