//! Mahalanobis distance against a reference space.
//!
//! ## Purpose
//!
//! This module computes the MTS form of the Mahalanobis distance of a sample
//! from a reference ("normal") population: the sample is standardized, then
//! measured through the inverse of the reference correlation structure.
//!
//! ## Design notes
//!
//! * **Fit once**: `MahalanobisModel` holds the reference moments and the
//!   inverted correlation structure, so scoring many samples costs one
//!   inversion.
//! * **Provider arithmetic**: The quadratic form is assembled from the
//!   provider's matrix product on a 1 × n row and an n × 1 column.
//! * **Normalization**: The result is scaled by 2 / N, where N is the number
//!   of reference samples.
//!
//! ## Key concepts
//!
//! ```text
//! D = 2 · (z · C⁻¹ · zᵗ) / N
//! ```
//!
//! * `z`: standardized sample.
//! * `C`: variable-by-variable correlation of the reference space.
//!
//! ## Invariants
//!
//! * Distance is non-negative for a positive-definite correlation structure.
//! * A degenerate (constant) reference variable contributes nothing: its Z is
//!   zero and its correlation row is the identity row.
//!
//! ## Non-goals
//!
//! * This module does not choose an inversion algorithm; a singular
//!   correlation structure is reported by the provider.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use tracing::trace;

// Internal dependencies
use crate::algorithms::standardize::ReferenceMoments;
use crate::math::provider::MtsProvider;
use crate::primitives::errors::MtsError;
use crate::primitives::space::{Sample, Space};

/// Minimum reference samples needed to estimate correlations.
pub const MIN_REFERENCE_SAMPLES: usize = 2;

// ============================================================================
// Mahalanobis Model
// ============================================================================

/// A reference space prepared for distance computations.
#[derive(Debug, Clone, PartialEq)]
pub struct MahalanobisModel<T> {
    moments: ReferenceMoments,
    inverse_correlation: Space<T>,
    samples: usize,
}

impl<T: Copy> MahalanobisModel<T> {
    /// Compute moments and the inverse correlation structure of `space`.
    pub fn fit<P: MtsProvider<T>>(provider: &P, space: &Space<T>) -> Result<Self, MtsError> {
        if space.samples() < MIN_REFERENCE_SAMPLES {
            return Err(MtsError::TooFewSamples {
                got: space.samples(),
                min: MIN_REFERENCE_SAMPLES,
            });
        }

        let moments = ReferenceMoments::compute(provider, space)?;
        let correlation = correlation_structure(provider, space, &moments)?;
        let inverse_correlation = provider.invert(&correlation)?;

        trace!(
            samples = space.samples(),
            variables = space.variables(),
            "fitted reference space"
        );

        Ok(Self {
            moments,
            inverse_correlation,
            samples: space.samples(),
        })
    }

    /// Number of reference samples.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of variables.
    #[inline]
    pub fn variables(&self) -> usize {
        self.moments.variables()
    }

    /// Reference moments used for standardization.
    #[inline]
    pub fn moments(&self) -> &ReferenceMoments {
        &self.moments
    }

    /// Inverse of the reference correlation structure.
    #[inline]
    pub fn inverse_correlation(&self) -> &Space<T> {
        &self.inverse_correlation
    }

    /// Distance of one sample from the reference population.
    pub fn distance<P: MtsProvider<T>>(
        &self,
        provider: &P,
        sample: &Sample<T>,
    ) -> Result<f64, MtsError> {
        let z = self.moments.standardize(provider, sample)?;

        let row = Space::single_sample(&z);
        let column = Space::single_variable(&z);

        let weighted = provider.multiply(&row, &self.inverse_correlation)?;
        let quadratic = provider.multiply(&weighted, &column)?;

        Ok(2.0 * provider.to_f64(quadratic[(0, 0)]) / self.samples as f64)
    }

    /// Distance of every sample of `space` from the reference population.
    pub fn distances<P: MtsProvider<T>>(
        &self,
        provider: &P,
        space: &Space<T>,
    ) -> Result<Vec<f64>, MtsError> {
        let mut out = Vec::with_capacity(space.samples());
        for row in space.rows() {
            out.push(self.distance(provider, &Sample::from_slice(row)?)?);
        }
        Ok(out)
    }
}

// ============================================================================
// Correlation Structure
// ============================================================================

/// Variable-by-variable correlation matrix of `space`.
///
/// Pairs involving a degenerate variable are not correlated: the diagonal
/// entry is one and the off-diagonal entries are zero.
pub fn correlation_structure<T, P>(
    provider: &P,
    space: &Space<T>,
    moments: &ReferenceMoments,
) -> Result<Space<T>, MtsError>
where
    T: Copy,
    P: MtsProvider<T>,
{
    let variables = space.variables();
    let columns = (0..variables)
        .map(|v| space.variable(v))
        .collect::<Result<Vec<_>, _>>()?;

    let zero = provider.cast_int(0)?;
    let one = provider.cast_int(1)?;

    let mut values = Vec::with_capacity(variables * variables);
    for i in 0..variables {
        for j in 0..variables {
            let value = if moments.is_degenerate(i) || moments.is_degenerate(j) {
                if i == j {
                    one
                } else {
                    zero
                }
            } else {
                provider.correlate(&columns[i], &columns[j])?
            };
            values.push(value);
        }
    }

    Space::from_row_major(values, variables, variables)
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Distance of `sample` from the population described by `space`.
pub fn distance<T, P>(provider: &P, space: &Space<T>, sample: &Sample<T>) -> Result<f64, MtsError>
where
    T: Copy,
    P: MtsProvider<T>,
{
    MahalanobisModel::fit(provider, space)?.distance(provider, sample)
}

/// Distance of every sample of `test` from the population described by `space`.
pub fn distances<T, P>(
    provider: &P,
    space: &Space<T>,
    test: &Space<T>,
) -> Result<Vec<f64>, MtsError>
where
    T: Copy,
    P: MtsProvider<T>,
{
    MahalanobisModel::fit(provider, space)?.distances(provider, test)
}
