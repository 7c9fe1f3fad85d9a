#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use mts_rs::internals::math::linalg::FloatLinalg;
use mts_rs::internals::math::provider::{MtsProvider, NalgebraProvider};
use mts_rs::internals::primitives::errors::MtsError;
use mts_rs::internals::primitives::space::Space;

// ============================================================================
// Backend Tests
// ============================================================================

#[test]
fn test_float_linalg_invert_identity() {
    let identity = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let inverse = f64::invert_matrix(&identity, 3).unwrap();
    assert_eq!(inverse, identity.to_vec());
}

#[test]
fn test_float_linalg_multiply_row_major() {
    // [1 2 3]   [1 4]   [14 32]
    // [4 5 6] · [2 5] = [32 77]
    //           [3 6]
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let b = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    assert_eq!(
        f64::multiply_matrices(&a, &b, 2, 3, 2),
        vec![14.0, 32.0, 32.0, 77.0]
    );
}

#[test]
fn test_float_linalg_f32() {
    let m = [4.0f32, 7.0, 2.0, 6.0];
    let inverse = f32::invert_matrix(&m, 2).unwrap();
    // det = 10
    assert_relative_eq!(inverse[0], 0.6, epsilon = 1e-6);
    assert_relative_eq!(inverse[1], -0.7, epsilon = 1e-6);
    assert_relative_eq!(inverse[2], -0.2, epsilon = 1e-6);
    assert_relative_eq!(inverse[3], 0.4, epsilon = 1e-6);
}

// ============================================================================
// Matrix Operation Tests
// ============================================================================

#[test]
fn test_provider_multiply() {
    let provider = NalgebraProvider;
    let lhs = Space::<f64>::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let rhs = Space::<f64>::from_rows(&[[1.0], [0.0], [-1.0]]).unwrap();

    let product = provider.multiply(&lhs, &rhs).unwrap();
    assert_eq!((product.samples(), product.variables()), (2, 1));
    assert_eq!(product.as_slice(), &[-2.0, -2.0]);
}

#[test]
fn test_provider_multiply_shape_mismatch() {
    let provider = NalgebraProvider;
    let lhs = Space::<f64>::from_rows(&[[1.0, 2.0]]).unwrap();
    let rhs = Space::<f64>::from_rows(&[[1.0, 2.0]]).unwrap();
    assert_eq!(
        provider.multiply(&lhs, &rhs),
        Err(MtsError::DimensionMismatch {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn test_provider_invert_round_trip_is_identity() {
    let provider = NalgebraProvider;
    let m = Space::<f64>::from_rows(&[[1.0, 0.5, 0.2], [0.5, 1.0, 0.3], [0.2, 0.3, 1.0]]).unwrap();

    let inverse = provider.invert(&m).unwrap();
    let product = provider.multiply(&m, &inverse).unwrap();

    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(product[(i, j)], expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_provider_invert_singular() {
    let provider = NalgebraProvider;
    let m = Space::<f64>::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    assert_eq!(
        provider.invert(&m),
        Err(MtsError::SingularMatrix { size: 2 })
    );
}

#[test]
fn test_provider_invert_not_square() {
    let provider = NalgebraProvider;
    let m = Space::<f64>::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(
        provider.invert(&m),
        Err(MtsError::NotSquare { rows: 2, cols: 3 })
    );
}

// ============================================================================
// Scalar Operation Tests
// ============================================================================

#[test]
fn test_provider_scalar_operations() {
    let provider = NalgebraProvider;

    let two: f64 = provider.cast_int(2).unwrap();
    assert_eq!(two, 2.0);
    assert_eq!(MtsProvider::<f64>::cast_f64(&provider, 0.25).unwrap(), 0.25);
    assert_eq!(MtsProvider::<f64>::to_f64(&provider, 1.5), 1.5);
    assert_eq!(provider.add(1.0f64, 2.0), 3.0);
    assert_eq!(provider.modulo(3.0, two), 1.0);
    assert_eq!(provider.modulo(2.0, two), 0.0);
}

#[test]
fn test_provider_statistics() {
    let provider = NalgebraProvider;
    assert_relative_eq!(provider.mean(&[2.0f64, 4.0, 6.0]), 4.0);
    assert_relative_eq!(
        provider.correlate(&[1.0f64, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap(),
        -1.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_provider_f32() {
    let provider = NalgebraProvider;
    let m = Space::from_rows(&[[2.0f32, 0.0], [0.0, 4.0]]).unwrap();
    let inverse = provider.invert(&m).unwrap();
    assert_relative_eq!(inverse[(0, 0)], 0.5f32);
    assert_relative_eq!(inverse[(1, 1)], 0.25f32);
}
