#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use mts_rs::internals::math::statistics::{mean, pearson};
use mts_rs::internals::primitives::errors::MtsError;

// ============================================================================
// Mean Tests
// ============================================================================

#[test]
fn test_mean_basic() {
    assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    assert_relative_eq!(mean(&[-3.0f32, 3.0]), 0.0);
}

#[test]
fn test_mean_empty_is_zero() {
    let empty: [f64; 0] = [];
    assert_eq!(mean(&empty), 0.0);
}

// ============================================================================
// Correlation Tests
// ============================================================================

#[test]
fn test_pearson_perfect_positive() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [10.0, 20.0, 30.0, 40.0];
    assert_relative_eq!(pearson(&a, &b).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_pearson_perfect_negative() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [4.0, 3.0, 2.0, 1.0];
    assert_relative_eq!(pearson(&a, &b).unwrap(), -1.0, epsilon = 1e-12);
}

#[test]
fn test_pearson_known_value() {
    // Centered: a = (-1.5, -0.5, 0.5, 1.5), b = (-0.75, -1.75, 2.25, 0.25)
    // r = 3.5 / sqrt(5 * 8.75) = sqrt(7) / 5
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [2.0, 1.0, 5.0, 3.0];
    assert_relative_eq!(pearson(&a, &b).unwrap(), 7.0f64.sqrt() / 5.0, epsilon = 1e-12);
}

#[test]
fn test_pearson_is_symmetric() {
    let a = [0.3, 1.7, 2.2, 5.1, 4.0];
    let b = [1.0, 0.5, 2.5, 3.0, 4.5];
    assert_relative_eq!(pearson(&a, &b).unwrap(), pearson(&b, &a).unwrap());
}

#[test]
fn test_pearson_constant_input_is_zero() {
    let a = [5.0, 5.0, 5.0];
    let b = [1.0, 2.0, 3.0];
    assert_eq!(pearson(&a, &b).unwrap(), 0.0);
    assert_eq!(pearson(&a, &a).unwrap(), 0.0);
}

#[test]
fn test_pearson_length_mismatch() {
    assert_eq!(
        pearson(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(MtsError::DimensionMismatch {
            expected: 3,
            got: 2
        })
    );
}

#[test]
fn test_pearson_too_few_values() {
    assert_eq!(
        pearson(&[1.0], &[2.0]),
        Err(MtsError::TooFewSamples { got: 1, min: 2 })
    );
}
