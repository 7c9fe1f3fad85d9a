//! Execution engine for variable selection.
//!
//! ## Purpose
//!
//! This module runs the selection experiment: it generates the orthogonal
//! array for the test space, scores every run on the masked reference and
//! test spaces, and aggregates the run ratios into per-variable effects.
//!
//! ## Design notes
//!
//! * **Independent runs**: A run reads only the original spaces and its own
//!   inclusion flags, and writes only its own accumulator.
//! * **Fork-join**: With the `parallel` feature and `parallel = true`, runs
//!   are scored on the rayon pool and accumulators are reduced with
//!   `EffectAccumulator::merge`. The first failing run aborts the reduction.
//! * **Fit per run**: The masked reference space is fitted once per run and
//!   reused for all test samples of that run.
//!
//! ## Key concepts
//!
//! * **Run**: One row of the orthogonal array; level 1 keeps a variable,
//!   level 2 drops it.
//! * **Empty run**: A run that keeps no variable has no distance. It is
//!   counted as skipped and contributes to no effect.
//!
//! ## Invariants
//!
//! * Reference and test spaces have the same variable count.
//! * The result holds exactly one effect per test variable.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness of input data (handled by
//!   `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::distance::MahalanobisModel;
use crate::algorithms::orthogonal::{self, DEFAULT_LEVEL_TOLERANCE};
use crate::engine::validator::Validator;
use crate::evaluation::effects::{EffectAccumulator, VariableSelection};
use crate::evaluation::signal::{signal_to_noise, LogBase};
use crate::math::provider::MtsProvider;
use crate::primitives::errors::MtsError;
use crate::primitives::space::{Sample, Space};

// ============================================================================
// Configuration
// ============================================================================

/// Settings of a selection run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionConfig {
    /// Logarithm base of the signal-to-noise ratio.
    pub log_base: LogBase,

    /// Tolerance when recognizing the included level.
    pub level_tolerance: f64,

    /// Whether to score runs in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            log_base: LogBase::default(),
            level_tolerance: DEFAULT_LEVEL_TOLERANCE,
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the orthogonal-array selection experiment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionExecutor {
    config: SelectionConfig,
}

impl SelectionExecutor {
    /// Create an executor from a configuration.
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[inline]
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Judge every variable of `test` against `reference`.
    pub fn run<T, P>(
        &self,
        provider: &P,
        reference: &Space<T>,
        test: &Space<T>,
    ) -> Result<VariableSelection, MtsError>
    where
        T: Copy + Send + Sync,
        P: MtsProvider<T>,
    {
        let variables = test.variables();
        Validator::validate_dimensions(reference.variables(), variables)?;

        let oa = orthogonal::generate(provider, variables)?;
        let masks = (0..oa.samples())
            .map(|run| {
                let tolerance = self.config.level_tolerance;
                orthogonal::included_mask(provider, &oa, run, variables, tolerance)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            variables,
            runs = masks.len(),
            reference_samples = reference.samples(),
            test_samples = test.samples(),
            parallel = self.config.parallel,
            "starting variable selection"
        );

        let accumulator = if self.config.parallel {
            self.accumulate_parallel(provider, reference, test, &masks)?
        } else {
            self.accumulate_sequential(provider, reference, test, &masks)?
        };

        let selection = accumulator.finish(self.config.log_base);

        debug!(
            runs = selection.runs,
            skipped_runs = selection.skipped_runs,
            useful = selection.useful_variables().len(),
            "variable selection finished"
        );

        Ok(selection)
    }

    fn accumulate_sequential<T, P>(
        &self,
        provider: &P,
        reference: &Space<T>,
        test: &Space<T>,
        masks: &[Vec<bool>],
    ) -> Result<EffectAccumulator, MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        let mut accumulator = EffectAccumulator::new(test.variables());
        for (run, mask) in masks.iter().enumerate() {
            self.accumulate_run(provider, reference, test, run, mask, &mut accumulator)?;
        }
        Ok(accumulator)
    }

    #[cfg(feature = "parallel")]
    fn accumulate_parallel<T, P>(
        &self,
        provider: &P,
        reference: &Space<T>,
        test: &Space<T>,
        masks: &[Vec<bool>],
    ) -> Result<EffectAccumulator, MtsError>
    where
        T: Copy + Send + Sync,
        P: MtsProvider<T>,
    {
        use rayon::prelude::*;

        let variables = test.variables();
        masks
            .par_iter()
            .enumerate()
            .map(|(run, mask)| -> Result<EffectAccumulator, MtsError> {
                let mut local = EffectAccumulator::new(variables);
                self.accumulate_run(provider, reference, test, run, mask, &mut local)?;
                Ok(local)
            })
            .try_reduce(
                || EffectAccumulator::new(variables),
                |a, b| Ok(a.merge(b)),
            )
    }

    #[cfg(not(feature = "parallel"))]
    fn accumulate_parallel<T, P>(
        &self,
        provider: &P,
        reference: &Space<T>,
        test: &Space<T>,
        masks: &[Vec<bool>],
    ) -> Result<EffectAccumulator, MtsError>
    where
        T: Copy + Send + Sync,
        P: MtsProvider<T>,
    {
        debug!("`parallel` feature disabled; scoring runs sequentially");
        self.accumulate_sequential(provider, reference, test, masks)
    }

    fn accumulate_run<T, P>(
        &self,
        provider: &P,
        reference: &Space<T>,
        test: &Space<T>,
        run: usize,
        mask: &[bool],
        accumulator: &mut EffectAccumulator,
    ) -> Result<(), MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        match self.score_run(provider, reference, test, mask)? {
            Some(sn) => {
                trace!(run, signal_to_noise = sn, "scored run");
                accumulator.record(mask, sn);
            }
            None => {
                debug!(run, "run includes no variable; skipped");
                accumulator.skip();
            }
        }
        Ok(())
    }

    /// Signal-to-noise ratio of one run, or `None` if it keeps no variable.
    pub fn score_run<T, P>(
        &self,
        provider: &P,
        reference: &Space<T>,
        test: &Space<T>,
        mask: &[bool],
    ) -> Result<Option<f64>, MtsError>
    where
        T: Copy,
        P: MtsProvider<T>,
    {
        let kept: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(v, &included)| included.then_some(v))
            .collect();
        if kept.is_empty() {
            return Ok(None);
        }

        let masked_reference = reference.select_variables(&kept)?;
        let masked_test = test.select_variables(&kept)?;
        let model = MahalanobisModel::fit(provider, &masked_reference)?;

        let mut inverse_sum = 0.0;
        for row in masked_test.rows() {
            inverse_sum += 1.0 / model.distance(provider, &Sample::from_slice(row)?)?;
        }

        Ok(Some(signal_to_noise(
            inverse_sum,
            test.samples(),
            self.config.log_base,
        )))
    }
}
