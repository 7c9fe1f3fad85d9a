#![cfg(feature = "dev")]

use mts_rs::internals::algorithms::orthogonal::{EXCLUDED_LEVEL, INCLUDED_LEVEL};
use mts_rs::internals::engine::validator::Validator;
use mts_rs::internals::math::provider::NalgebraProvider;
use mts_rs::internals::primitives::errors::MtsError;
use mts_rs::internals::primitives::space::{Sample, Space};

// ============================================================================
// Data Validation Tests
// ============================================================================

#[test]
fn test_validate_reference() {
    let provider = NalgebraProvider;
    let good = Space::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert!(Validator::validate_reference(&provider, &good).is_ok());

    let single = Space::from_rows(&[[1.0, 2.0]]).unwrap();
    assert_eq!(
        Validator::validate_reference(&provider, &single),
        Err(MtsError::TooFewSamples { got: 1, min: 2 })
    );
}

#[test]
fn test_validate_reference_rejects_non_finite() {
    let provider = NalgebraProvider;
    let space = Space::from_rows(&[[1.0, 2.0], [3.0, f64::NAN]]).unwrap();
    assert_eq!(
        Validator::validate_reference(&provider, &space),
        Err(MtsError::InvalidNumericValue("reference[1, 1]=NaN".to_string()))
    );

    let space = Space::from_rows(&[[f64::INFINITY, 2.0], [3.0, 4.0]]).unwrap();
    assert!(matches!(
        Validator::validate_reference(&provider, &space),
        Err(MtsError::InvalidNumericValue(_))
    ));
}

#[test]
fn test_validate_test_space() {
    let provider = NalgebraProvider;
    let reference = Space::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();

    let test = Space::from_rows(&[[5.0, 6.0]]).unwrap();
    assert!(Validator::validate_test_space(&provider, &reference, &test).is_ok());

    let wide = Space::from_rows(&[[5.0, 6.0, 7.0]]).unwrap();
    assert_eq!(
        Validator::validate_test_space(&provider, &reference, &wide),
        Err(MtsError::DimensionMismatch {
            expected: 2,
            got: 3
        })
    );

    let bad = Space::from_rows(&[[5.0, 6.0], [f64::NEG_INFINITY, 0.0]]).unwrap();
    assert_eq!(
        Validator::validate_test_space(&provider, &reference, &bad),
        Err(MtsError::InvalidNumericValue("test[1, 0]=-inf".to_string()))
    );
}

#[test]
fn test_validate_sample() {
    let provider = NalgebraProvider;
    let reference = Space::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();

    let sample = Sample::new(vec![1.0, 1.0]).unwrap();
    assert!(Validator::validate_sample(&provider, &reference, &sample).is_ok());

    let short = Sample::new(vec![1.0]).unwrap();
    assert!(matches!(
        Validator::validate_sample(&provider, &reference, &short),
        Err(MtsError::DimensionMismatch { .. })
    ));

    let nan = Sample::new(vec![1.0, f64::NAN]).unwrap();
    assert_eq!(
        Validator::validate_sample(&provider, &reference, &nan),
        Err(MtsError::InvalidNumericValue("sample[0, 1]=NaN".to_string()))
    );
}

#[test]
fn test_validate_dimensions() {
    assert!(Validator::validate_dimensions(3, 3).is_ok());
    assert_eq!(
        Validator::validate_dimensions(3, 4),
        Err(MtsError::DimensionMismatch {
            expected: 3,
            got: 4
        })
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

#[test]
fn test_validate_level_tolerance() {
    assert!(Validator::validate_level_tolerance(1e-6).is_ok());
    assert!(Validator::validate_level_tolerance(0.49).is_ok());

    for bad in [0.0, -1e-6, 0.5, 1.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                Validator::validate_level_tolerance(bad),
                Err(MtsError::InvalidTolerance(_))
            ),
            "tolerance {} accepted",
            bad
        );
    }
}

#[test]
fn test_validate_level_tolerance_bound_follows_levels() {
    let half_gap = f64::from(EXCLUDED_LEVEL - INCLUDED_LEVEL) / 2.0;

    assert!(Validator::validate_level_tolerance(half_gap * 0.999).is_ok());
    assert_eq!(
        Validator::validate_level_tolerance(half_gap),
        Err(MtsError::InvalidTolerance(half_gap))
    );
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("parallel")),
        Err(MtsError::DuplicateParameter {
            parameter: "parallel"
        })
    );
}
