//! High-level API for the Mahalanobis-Taguchi System.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the selection experiment and the numeric
//! provider, and a configured [`Mts`] handle exposing standardization,
//! distance and variable selection.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Injected arithmetic**: The numeric provider is a type parameter chosen
//!   with `.provider()`; the default is [`NalgebraProvider`].
//! * **Validated**: Parameters are validated when `.build()` is called; data
//!   is validated on every call before any computation.
//! * **Type-Safe**: Generic over the scalar type of the spaces.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MtsBuilder`] via `Mts::builder()`.
//! 2. Chain configuration methods (`.log_base()`, `.level_tolerance()`, etc.).
//! 3. Call `.build()` to obtain an [`Mts`] handle.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::marker::PhantomData;

// Internal dependencies
use crate::algorithms::orthogonal;
use crate::engine::executor::SelectionExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::distance::MahalanobisModel;
pub use crate::algorithms::standardize::ReferenceMoments;
pub use crate::engine::executor::SelectionConfig;
pub use crate::evaluation::effects::{Usefulness, VariableEffect, VariableSelection};
pub use crate::evaluation::signal::LogBase;
pub use crate::math::linalg::FloatLinalg;
pub use crate::math::provider::{MtsProvider, NalgebraProvider};
pub use crate::primitives::errors::MtsError;
pub use crate::primitives::space::{Sample, Space};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an MTS handle.
#[derive(Debug, Clone)]
pub struct MtsBuilder<T, P = NalgebraProvider> {
    /// Numeric provider used for all arithmetic.
    pub provider: P,

    /// Logarithm base of the signal-to-noise ratio (default: `Decimal`).
    pub log_base: Option<LogBase>,

    /// Tolerance when recognizing the included level (default: 1e-6).
    pub level_tolerance: Option<f64>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    provider_set: bool,
    _scalar: PhantomData<fn() -> T>,
}

impl<T: FloatLinalg> Default for MtsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> MtsBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            provider: NalgebraProvider,
            log_base: None,
            level_tolerance: None,
            parallel: None,
            duplicate_param: None,
            provider_set: false,
            _scalar: PhantomData,
        }
    }
}

impl<T, P: MtsProvider<T>> MtsBuilder<T, P> {
    /// Replace the numeric provider.
    pub fn provider<Q: MtsProvider<T>>(self, provider: Q) -> MtsBuilder<T, Q> {
        let duplicate_param = if self.provider_set {
            Some("provider")
        } else {
            self.duplicate_param
        };

        MtsBuilder {
            provider,
            log_base: self.log_base,
            level_tolerance: self.level_tolerance,
            parallel: self.parallel,
            duplicate_param,
            provider_set: true,
            _scalar: PhantomData,
        }
    }

    /// Set the logarithm base of the signal-to-noise ratio.
    pub fn log_base(mut self, base: LogBase) -> Self {
        if self.log_base.is_some() {
            self.duplicate_param = Some("log_base");
        }
        self.log_base = Some(base);
        self
    }

    /// Set the tolerance used to recognize the included level of a run.
    pub fn level_tolerance(mut self, tolerance: f64) -> Self {
        if self.level_tolerance.is_some() {
            self.duplicate_param = Some("level_tolerance");
        }
        self.level_tolerance = Some(tolerance);
        self
    }

    /// Score selection runs in parallel (requires the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the handle.
    pub fn build(self) -> Result<Mts<T, P>, MtsError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = SelectionConfig::default();
        let config = SelectionConfig {
            log_base: self.log_base.unwrap_or(defaults.log_base),
            level_tolerance: self.level_tolerance.unwrap_or(defaults.level_tolerance),
            parallel: self.parallel.unwrap_or(defaults.parallel),
        };

        // Validate level tolerance
        Validator::validate_level_tolerance(config.level_tolerance)?;

        Ok(Mts {
            provider: self.provider,
            executor: SelectionExecutor::new(config),
            _scalar: PhantomData,
        })
    }
}

// ============================================================================
// MTS Handle
// ============================================================================

/// A configured Mahalanobis-Taguchi System.
#[derive(Debug, Clone)]
pub struct Mts<T, P = NalgebraProvider> {
    provider: P,
    executor: SelectionExecutor,
    _scalar: PhantomData<fn() -> T>,
}

impl<T: FloatLinalg> Mts<T> {
    /// Start configuring a handle with the default provider.
    pub fn builder() -> MtsBuilder<T> {
        MtsBuilder::new()
    }
}

impl<T, P> Mts<T, P>
where
    T: Copy + Send + Sync,
    P: MtsProvider<T>,
{
    /// Numeric provider in use.
    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Selection configuration in use.
    #[inline]
    pub fn config(&self) -> &SelectionConfig {
        self.executor.config()
    }

    /// Standardize `sample` against the mean and standard deviation of
    /// `reference`. Constant reference variables map to zero.
    pub fn standardize(
        &self,
        reference: &Space<T>,
        sample: &Sample<T>,
    ) -> Result<Sample<T>, MtsError> {
        Validator::validate_sample(&self.provider, reference, sample)?;
        ReferenceMoments::compute(&self.provider, reference)?.standardize(&self.provider, sample)
    }

    /// Standardize every sample of `space` against `reference`.
    pub fn standardize_space(
        &self,
        reference: &Space<T>,
        space: &Space<T>,
    ) -> Result<Space<T>, MtsError> {
        Validator::validate_test_space(&self.provider, reference, space)?;
        ReferenceMoments::compute(&self.provider, reference)?
            .standardize_space(&self.provider, space)
    }

    /// Prepare `reference` for repeated distance computations.
    pub fn fit(&self, reference: &Space<T>) -> Result<MahalanobisModel<T>, MtsError> {
        Validator::validate_reference(&self.provider, reference)?;
        MahalanobisModel::fit(&self.provider, reference)
    }

    /// Mahalanobis distance of `sample` from the `reference` population.
    pub fn distance(&self, reference: &Space<T>, sample: &Sample<T>) -> Result<f64, MtsError> {
        Validator::validate_sample(&self.provider, reference, sample)?;
        self.fit(reference)?.distance(&self.provider, sample)
    }

    /// Mahalanobis distance of every sample of `test` from `reference`.
    pub fn distances(&self, reference: &Space<T>, test: &Space<T>) -> Result<Vec<f64>, MtsError> {
        Validator::validate_test_space(&self.provider, reference, test)?;
        self.fit(reference)?.distances(&self.provider, test)
    }

    /// Two-level orthogonal array with at least one column per variable.
    ///
    /// The first `variables` columns are the ones a selection run reads.
    pub fn orthogonal_array(&self, variables: usize) -> Result<Space<T>, MtsError> {
        orthogonal::generate(&self.provider, variables)
    }

    /// Judge which variables of `test` help separate it from `reference`.
    ///
    /// The returned selection holds one effect per test variable.
    pub fn select_useful_variables(
        &self,
        reference: &Space<T>,
        test: &Space<T>,
    ) -> Result<VariableSelection, MtsError> {
        Validator::validate_reference(&self.provider, reference)?;
        Validator::validate_test_space(&self.provider, reference, test)?;
        self.executor.run(&self.provider, reference, test)
    }

    /// Variable selection with a single abnormal sample.
    pub fn select_useful_variables_for_sample(
        &self,
        reference: &Space<T>,
        sample: &Sample<T>,
    ) -> Result<VariableSelection, MtsError> {
        self.select_useful_variables(reference, &Space::single_sample(sample))
    }
}
