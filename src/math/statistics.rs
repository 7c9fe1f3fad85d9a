//! Descriptive statistics over raw value arrays.
//!
//! ## Purpose
//!
//! This module provides the array-level statistics the numeric provider
//! exposes to the engine: the arithmetic mean and the Pearson correlation
//! of two equal-length arrays.
//!
//! ## Design notes
//!
//! * **Precision**: Accumulation is done in `f64` regardless of the input type.
//! * **Two-pass**: Correlation centers the data first, then accumulates
//!   cross-products, which is more stable than the one-pass formula.
//!
//! ## Invariants
//!
//! * Correlation is in [-1, 1] for non-degenerate input.
//! * An array with zero variance has zero correlation with everything.
//!
//! ## Non-goals
//!
//! * This module does not compute sample (n − 1) statistics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MtsError;

// ============================================================================
// Mean
// ============================================================================

/// Arithmetic mean of the values, accumulated in `f64`.
///
/// Returns zero for an empty slice.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum = values
        .iter()
        .fold(0.0, |acc, v| acc + v.to_f64().unwrap_or(f64::NAN));
    sum / values.len() as f64
}

// ============================================================================
// Correlation
// ============================================================================

/// Pearson correlation coefficient of two equal-length arrays.
///
/// # Formula
///
/// ```text
/// r = Σ(aᵢ - ā)(bᵢ - b̄) / √(Σ(aᵢ - ā)² · Σ(bᵢ - b̄)²)
/// ```
///
/// Degenerate input (either array constant) yields zero.
pub fn pearson<T: Float>(a: &[T], b: &[T]) -> Result<T, MtsError> {
    if a.len() != b.len() {
        return Err(MtsError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    if a.len() < 2 {
        return Err(MtsError::TooFewSamples {
            got: a.len(),
            min: 2,
        });
    }

    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut cross = 0.0;
    let mut sum_sq_a = 0.0;
    let mut sum_sq_b = 0.0;
    for (&ai, &bi) in a.iter().zip(b.iter()) {
        let da = ai.to_f64().unwrap_or(f64::NAN) - mean_a;
        let db = bi.to_f64().unwrap_or(f64::NAN) - mean_b;
        cross += da * db;
        sum_sq_a += da * da;
        sum_sq_b += db * db;
    }

    let denominator = Float::sqrt(sum_sq_a * sum_sq_b);
    let r = if denominator > 0.0 {
        // Rounding can push |r| marginally past one.
        (cross / denominator).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    T::from(r).ok_or_else(|| MtsError::InvalidNumericValue(format!("correlation={}", r)))
}
