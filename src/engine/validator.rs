//! Input validation for MTS configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for builder parameters and
//! for the spaces and samples handed to the public API. It checks shapes,
//! finiteness and parameter bounds before any computation starts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Provider-aware**: Finiteness is judged through the provider's `to_f64`,
//!   so any working type can be checked.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * Zero-variance variables are valid input and are not rejected here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::algorithms::distance::MIN_REFERENCE_SAMPLES;
use crate::algorithms::orthogonal::{EXCLUDED_LEVEL, INCLUDED_LEVEL};
use crate::math::provider::MtsProvider;
use crate::primitives::errors::MtsError;
use crate::primitives::space::{Sample, Space};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for MTS configuration and input data.
///
/// All methods return `Result<(), MtsError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate a reference space: enough samples, all values finite.
    pub fn validate_reference<T, P>(provider: &P, space: &Space<T>) -> Result<(), MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        if space.samples() < MIN_REFERENCE_SAMPLES {
            return Err(MtsError::TooFewSamples {
                got: space.samples(),
                min: MIN_REFERENCE_SAMPLES,
            });
        }
        Self::validate_finite(provider, space.as_slice(), "reference", space.variables())
    }

    /// Validate a test space against a reference space.
    pub fn validate_test_space<T, P>(
        provider: &P,
        reference: &Space<T>,
        test: &Space<T>,
    ) -> Result<(), MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        Self::validate_dimensions(reference.variables(), test.variables())?;
        Self::validate_finite(provider, test.as_slice(), "test", test.variables())
    }

    /// Validate a sample against a reference space.
    pub fn validate_sample<T, P>(
        provider: &P,
        reference: &Space<T>,
        sample: &Sample<T>,
    ) -> Result<(), MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        Self::validate_dimensions(reference.variables(), sample.variables())?;
        Self::validate_finite(provider, sample.as_slice(), "sample", sample.variables())
    }

    /// Validate that two variable counts agree.
    #[inline]
    pub fn validate_dimensions(expected: usize, got: usize) -> Result<(), MtsError> {
        if expected != got {
            return Err(MtsError::DimensionMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate that every value is finite.
    fn validate_finite<T, P>(
        provider: &P,
        values: &[T],
        name: &str,
        variables: usize,
    ) -> Result<(), MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        for (i, &value) in values.iter().enumerate() {
            let v = provider.to_f64(value);
            if !v.is_finite() {
                return Err(MtsError::InvalidNumericValue(format!(
                    "{}[{}, {}]={}",
                    name,
                    i / variables,
                    i % variables,
                    v
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the tolerance used to recognize the included level.
    ///
    /// The tolerance must stay below half the gap between the included and
    /// excluded levels, so no entry can match both.
    pub fn validate_level_tolerance(tolerance: f64) -> Result<(), MtsError> {
        let half_gap = f64::from(EXCLUDED_LEVEL - INCLUDED_LEVEL) / 2.0;
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= half_gap {
            return Err(MtsError::InvalidTolerance(tolerance));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set twice.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), MtsError> {
        if let Some(parameter) = duplicate_param {
            return Err(MtsError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
