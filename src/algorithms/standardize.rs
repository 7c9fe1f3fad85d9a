//! Standardization of samples into the unit space.
//!
//! ## Purpose
//!
//! This module converts raw samples into Z vectors relative to a reference
//! space: every value is centered on its variable's mean and divided by its
//! variable's standard deviation.
//!
//! ## Design notes
//!
//! * **Population moments**: The standard deviation divides by the sample
//!   count N, not N − 1.
//! * **Reusable moments**: `ReferenceMoments` is computed once per reference
//!   space and can standardize any number of samples.
//! * **Double precision**: Differences and ratios are formed in `f64` and cast
//!   back into the working type by the provider.
//!
//! ## Key concepts
//!
//! * **Unit space**: The reference population after standardization; every
//!   non-constant variable has mean 0 and standard deviation 1.
//! * **Degenerate variable**: A variable whose reference values are all
//!   equal. Its standard deviation is exactly zero and its Z value is the
//!   provider's zero, never a division by a rounding residue.
//!
//! ## Invariants
//!
//! * Z vectors have exactly as many entries as the reference has variables.
//!
//! ## Non-goals
//!
//! * This module does not decorrelate variables (see `distance`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::provider::MtsProvider;
use crate::primitives::errors::MtsError;
use crate::primitives::space::{Sample, Space};

// ============================================================================
// Reference Moments
// ============================================================================

/// Per-variable mean and population standard deviation of a reference space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceMoments {
    means: Vec<f64>,
    std_devs: Vec<f64>,
}

impl ReferenceMoments {
    /// Compute the moments of every variable of `space`.
    pub fn compute<T, P>(provider: &P, space: &Space<T>) -> Result<Self, MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        let variables = space.variables();
        let n = space.samples() as f64;

        let mut means = Vec::with_capacity(variables);
        for v in 0..variables {
            means.push(provider.mean(&space.variable(v)?));
        }

        // Constancy is read from the data; a rounded mean leaves a residue.
        let first: Vec<f64> = match space.rows().next() {
            Some(row) => row.iter().map(|&value| provider.to_f64(value)).collect(),
            None => Vec::new(),
        };
        let mut constant = vec![true; variables];

        let mut variances = vec![0.0; variables];
        for row in space.rows() {
            for (j, &value) in row.iter().enumerate() {
                let x = provider.to_f64(value);
                if x != first[j] {
                    constant[j] = false;
                }
                let diff = x - means[j];
                variances[j] += diff * diff / n;
            }
        }

        let std_devs = variances
            .into_iter()
            .zip(constant)
            .map(|(variance, constant)| if constant { 0.0 } else { Float::sqrt(variance) })
            .collect();

        Ok(Self { means, std_devs })
    }

    /// Number of variables described.
    #[inline]
    pub fn variables(&self) -> usize {
        self.means.len()
    }

    /// Per-variable means.
    #[inline]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Per-variable population standard deviations.
    #[inline]
    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }

    /// Whether a variable has zero standard deviation.
    #[inline]
    pub fn is_degenerate(&self, variable: usize) -> bool {
        self.std_devs[variable] == 0.0
    }

    /// Standardize one sample against these moments.
    pub fn standardize<T, P>(
        &self,
        provider: &P,
        sample: &Sample<T>,
    ) -> Result<Sample<T>, MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        self.standardize_values(provider, sample.as_slice())
    }

    /// Standardize every sample of `space` against these moments.
    pub fn standardize_space<T, P>(
        &self,
        provider: &P,
        space: &Space<T>,
    ) -> Result<Space<T>, MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        let mut values = Vec::with_capacity(space.samples() * space.variables());
        for row in space.rows() {
            values.extend(self.standardize_values(provider, row)?.into_vec());
        }
        Space::from_row_major(values, space.samples(), space.variables())
    }

    fn standardize_values<T, P>(&self, provider: &P, values: &[T]) -> Result<Sample<T>, MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        if values.len() != self.variables() {
            return Err(MtsError::DimensionMismatch {
                expected: self.variables(),
                got: values.len(),
            });
        }

        let zero = provider.cast_int(0)?;
        let mut z = Vec::with_capacity(values.len());
        for (i, &value) in values.iter().enumerate() {
            if self.is_degenerate(i) {
                z.push(zero);
            } else {
                let scaled = (provider.to_f64(value) - self.means[i]) / self.std_devs[i];
                z.push(provider.cast_f64(scaled)?);
            }
        }

        Sample::new(z)
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Standardize a sample against a reference space.
pub fn standardize<T, P>(
    provider: &P,
    reference: &Space<T>,
    sample: &Sample<T>,
) -> Result<Sample<T>, MtsError>
where
    T: Copy,
    P: MtsProvider<T>,
{
    ReferenceMoments::compute(provider, reference)?.standardize(provider, sample)
}

/// Standardize every sample of `space` against a reference space.
pub fn standardize_space<T, P>(
    provider: &P,
    reference: &Space<T>,
    space: &Space<T>,
) -> Result<Space<T>, MtsError>
where
    T: Copy,
    P: MtsProvider<T>,
{
    ReferenceMoments::compute(provider, reference)?.standardize_space(provider, space)
}
