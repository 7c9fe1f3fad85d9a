//! Signal-to-noise ratio of a selection run.
//!
//! ## Purpose
//!
//! This module scores one run of the selection experiment. Abnormal samples
//! should lie far from the reference population, so the run is scored with
//! Taguchi's larger-the-better ratio over the distances of the test samples.
//!
//! ## Key concepts
//!
//! ```text
//! SN = -10 · log_b( (Σ 1/Dᵢ) / n )
//! ```
//!
//! * `Dᵢ`: distance of test sample `i` from the masked reference space.
//! * `n`: number of test samples.
//! * `b`: logarithm base, selected by `LogBase`.
//!
//! ## Invariants
//!
//! * Larger distances give a larger ratio.
//! * Changing the base rescales every ratio by the same positive factor, so
//!   the sign of any difference of ratios does not depend on the base.

// External dependencies
use num_traits::Float;

/// Logarithm used in the signal-to-noise ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogBase {
    /// Natural logarithm.
    Natural,

    /// Base-10 logarithm (decibels), the usual Taguchi convention.
    #[default]
    Decimal,
}

impl LogBase {
    /// Logarithm of `x` in this base.
    #[inline]
    pub fn log(self, x: f64) -> f64 {
        match self {
            Self::Natural => Float::ln(x),
            Self::Decimal => Float::log10(x),
        }
    }
}

/// Larger-the-better signal-to-noise ratio from the sum of inverse distances.
#[inline]
pub fn signal_to_noise(inverse_distance_sum: f64, samples: usize, base: LogBase) -> f64 {
    -10.0 * base.log(inverse_distance_sum / samples as f64)
}
