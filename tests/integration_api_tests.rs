//! Integration tests for the public fitting API.
//!
//! These tests exercise the crate the way a downstream user would: through
//! the prelude, the `Polyfit` builder, and the free functions.
//!
//! ## Test Organization
//!
//! 1. **Builder** - defaults and configuration chaining
//! 2. **Round Trips** - fit followed by evaluation
//! 3. **Concurrency** - independent fits on separate threads

use approx::assert_relative_eq;

use polyfit_rs::prelude::*;

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_defaults_to_linear_svd_fit() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![1.0, 3.0, 5.0, 7.0];

    // No configuration: degree 1, no weights, SVD.
    let c = Polyfit::new().fit(&x, &y).unwrap();

    assert_eq!(c.len(), 2);
    assert_relative_eq!(c[0], 1.0, max_relative = 1e-6);
    assert_relative_eq!(c[1], 2.0, max_relative = 1e-6);
}

#[test]
fn test_builder_matches_free_function() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![1.2, 2.1, 4.3, 8.9, 16.4];

    let from_builder = Polyfit::new().degree(2).fit(&x, &y).unwrap();
    let from_function = fit(&x, &y, 2).unwrap();

    assert_eq!(from_builder, from_function);
}

#[test]
fn test_builder_is_reusable_across_fits() {
    let builder = Polyfit::new().degree(1);

    let c1 = builder.fit(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    let c2 = builder.fit(&[0.0, 1.0], &[1.0, 3.0]).unwrap();

    assert_relative_eq!(c1[1], 1.0, max_relative = 1e-6);
    assert_relative_eq!(c2[1], 2.0, max_relative = 1e-6);
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_fit_then_evaluate_at_new_points() {
    // p(x) = 3 - x + 0.5x²
    let x = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
    let y: Vec<f64> = x.iter().map(|&v| 3.0 - v + 0.5 * v * v).collect();

    let c = fit(&x, &y, 2).unwrap();
    let predicted = evaluate(&c, &[4.0, -3.0]);

    assert_relative_eq!(predicted[0], 3.0 - 4.0 + 8.0, max_relative = 1e-6);
    assert_relative_eq!(predicted[1], 3.0 + 3.0 + 4.5, max_relative = 1e-6);
}

#[test]
fn test_evaluator_accepts_coefficients_of_any_length() {
    // The evaluator is agnostic to the degree used at fit time.
    let c = fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], 1).unwrap();
    let mut padded = c.clone();
    padded.push(0.0);

    let original = evaluate(&c, &[5.0]);
    let extended = evaluate(&padded, &[5.0]);

    assert_relative_eq!(original[0], extended[0], max_relative = 1e-12);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_independent_fits_run_concurrently() {
    let handles: Vec<_> = (1..=4)
        .map(|slope| {
            std::thread::spawn(move || {
                let x = vec![0.0, 1.0, 2.0, 3.0];
                let y: Vec<f64> = x.iter().map(|&v| slope as f64 * v).collect();
                fit(&x, &y, 1).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let c = handle.join().unwrap();
        assert_relative_eq!(c[1], (i + 1) as f64, max_relative = 1e-6);
    }
}
