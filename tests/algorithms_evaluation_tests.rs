//! Tests for polynomial evaluation.
//!
//! These tests verify the evaluator in isolation from fitting:
//! - Term accumulation against hand-computed values
//! - Edge cases (empty inputs, empty coefficients)
//! - IEEE 754 propagation of non-finite values
//!
//! ## Test Organization
//!
//! 1. **Values** - known polynomials at known points
//! 2. **Edge Cases** - empty inputs and coefficient slices
//! 3. **Non-Finite Inputs** - NaN/infinity propagation

use approx::assert_relative_eq;

use polyfit_rs::prelude::*;

// ============================================================================
// Values
// ============================================================================

#[test]
fn test_evaluate_constant_polynomial() {
    let c = vec![4.5];
    let x = vec![-10.0, 0.0, 3.0];

    let y = evaluate(&c, &x);

    assert_eq!(y, vec![4.5, 4.5, 4.5]);
}

#[test]
fn test_evaluate_linear_polynomial() {
    // p(x) = 2 + 3x
    let c = vec![2.0, 3.0];
    let x = vec![0.0, 1.0, 2.0, -1.0];

    let y = evaluate(&c, &x);

    assert_eq!(y.len(), 4);
    assert_relative_eq!(y[0], 2.0, max_relative = 1e-12);
    assert_relative_eq!(y[1], 5.0, max_relative = 1e-12);
    assert_relative_eq!(y[2], 8.0, max_relative = 1e-12);
    assert_relative_eq!(y[3], -1.0, max_relative = 1e-12);
}

#[test]
fn test_evaluate_cubic_polynomial() {
    // p(x) = 1 - x + 2x² + 0.5x³
    let c = vec![1.0, -1.0, 2.0, 0.5];

    let y = evaluate(&c, &[2.0]);

    assert_relative_eq!(y[0], 1.0 - 2.0 + 8.0 + 4.0, max_relative = 1e-12);
}

#[test]
fn test_evaluate_preserves_input_order() {
    let c = vec![0.0, 1.0];
    let x = vec![3.0, 1.0, 2.0];

    let y = evaluate(&c, &x);

    assert_eq!(y, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_evaluate_f32() {
    let c = vec![1.0_f32, 2.0];

    let y = evaluate(&c, &[2.0_f32]);

    assert_relative_eq!(y[0], 5.0_f32, max_relative = 1e-6);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_evaluate_empty_x_values() {
    let c = vec![1.0, 2.0, 3.0];
    let x: Vec<f64> = Vec::new();

    let y = evaluate(&c, &x);

    assert!(y.is_empty());
}

#[test]
fn test_evaluate_empty_coefficients_yield_zeros() {
    let c: Vec<f64> = Vec::new();
    let x = vec![1.0, 2.0, 3.0];

    let y = evaluate(&c, &x);

    assert_eq!(y, vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_evaluate_both_empty() {
    let c: Vec<f64> = Vec::new();
    let x: Vec<f64> = Vec::new();

    assert!(evaluate(&c, &x).is_empty());
}

// ============================================================================
// Non-Finite Inputs
// ============================================================================

#[test]
fn test_evaluate_nan_propagates() {
    let c = vec![1.0, 2.0];

    let y = evaluate(&c, &[f64::NAN]);

    assert!(y[0].is_nan());
}

#[test]
fn test_evaluate_infinity_propagates() {
    let c = vec![0.0, 1.0];

    let y = evaluate(&c, &[f64::INFINITY]);

    assert_eq!(y[0], f64::INFINITY);
}
