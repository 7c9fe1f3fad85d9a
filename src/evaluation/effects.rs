//! Per-variable factor effects and selection results.
//!
//! ## Purpose
//!
//! This module aggregates run ratios into per-variable effects: for each
//! variable, the mean ratio of the runs that included it is compared with the
//! mean ratio of the runs that excluded it.
//!
//! ## Design notes
//!
//! * **Mergeable**: `EffectAccumulator::merge` is associative and commutative,
//!   so runs can be accumulated in any order or in parallel partitions.
//! * **Explicit indeterminacy**: A variable that was never included (or never
//!   excluded) has no effect estimate and is reported as `Indeterminate`.
//!
//! ## Key concepts
//!
//! ```text
//! gain(v) = mean SN over runs including v − mean SN over runs excluding v
//! useful(v) ⇔ gain(v) >= 0
//! ```
//!
//! ## Invariants
//!
//! * `times_used[v] + times_not_used[v]` equals the number of scored runs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::evaluation::signal::LogBase;

// ============================================================================
// Result Types
// ============================================================================

/// Verdict on one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Usefulness {
    /// Including the variable does not lower the mean ratio.
    Useful,

    /// Including the variable lowers the mean ratio.
    NotUseful,

    /// One of the two levels was never observed, or the two levels cannot
    /// be compared.
    Indeterminate,
}

/// Effect of one variable over all scored runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableEffect {
    /// Variable index in the test space.
    pub variable: usize,

    /// Runs that included the variable.
    pub times_used: usize,

    /// Runs that excluded the variable.
    pub times_not_used: usize,

    /// Mean ratio of the runs that included the variable.
    pub mean_sn_used: Option<f64>,

    /// Mean ratio of the runs that excluded the variable.
    pub mean_sn_not_used: Option<f64>,

    /// `mean_sn_used − mean_sn_not_used`; `None` when a level is missing or
    /// the difference is undefined.
    pub gain: Option<f64>,

    /// Verdict derived from `gain`.
    pub usefulness: Usefulness,
}

/// Outcome of a variable selection experiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableSelection {
    /// One effect per test variable, in variable order.
    pub effects: Vec<VariableEffect>,

    /// Runs in the orthogonal array.
    pub runs: usize,

    /// Runs that included no variable and were not scored.
    pub skipped_runs: usize,

    /// Logarithm base of the ratios.
    pub log_base: LogBase,
}

impl VariableSelection {
    /// Number of variables judged.
    #[inline]
    pub fn variables(&self) -> usize {
        self.effects.len()
    }

    /// One flag per variable; indeterminate variables are not useful.
    pub fn is_useful(&self) -> Vec<bool> {
        self.effects
            .iter()
            .map(|e| e.usefulness == Usefulness::Useful)
            .collect()
    }

    /// One verdict per variable.
    pub fn usefulness(&self) -> Vec<Usefulness> {
        self.effects.iter().map(|e| e.usefulness).collect()
    }

    /// Indices of the useful variables.
    pub fn useful_variables(&self) -> Vec<usize> {
        self.effects
            .iter()
            .filter(|e| e.usefulness == Usefulness::Useful)
            .map(|e| e.variable)
            .collect()
    }
}

// ============================================================================
// Accumulator
// ============================================================================

/// Running sums of run ratios per variable and level.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectAccumulator {
    times_used: Vec<usize>,
    times_not_used: Vec<usize>,
    sn_used: Vec<f64>,
    sn_not_used: Vec<f64>,
    scored_runs: usize,
    skipped_runs: usize,
}

impl EffectAccumulator {
    /// Empty accumulator for `variables` variables.
    pub fn new(variables: usize) -> Self {
        Self {
            times_used: vec![0; variables],
            times_not_used: vec![0; variables],
            sn_used: vec![0.0; variables],
            sn_not_used: vec![0.0; variables],
            scored_runs: 0,
            skipped_runs: 0,
        }
    }

    /// Number of variables tracked.
    #[inline]
    pub fn variables(&self) -> usize {
        self.times_used.len()
    }

    /// Runs recorded with a ratio.
    #[inline]
    pub fn scored_runs(&self) -> usize {
        self.scored_runs
    }

    /// Runs recorded without a ratio.
    #[inline]
    pub fn skipped_runs(&self) -> usize {
        self.skipped_runs
    }

    /// Record the ratio of one run with its inclusion flags.
    pub fn record(&mut self, included: &[bool], signal_to_noise: f64) {
        debug_assert_eq!(included.len(), self.variables());
        for (v, &used) in included.iter().enumerate() {
            if used {
                self.times_used[v] += 1;
                self.sn_used[v] += signal_to_noise;
            } else {
                self.times_not_used[v] += 1;
                self.sn_not_used[v] += signal_to_noise;
            }
        }
        self.scored_runs += 1;
    }

    /// Record a run that produced no ratio.
    #[inline]
    pub fn skip(&mut self) {
        self.skipped_runs += 1;
    }

    /// Combine two accumulators over disjoint sets of runs.
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.variables(), other.variables());
        for v in 0..self.variables() {
            self.times_used[v] += other.times_used[v];
            self.times_not_used[v] += other.times_not_used[v];
            self.sn_used[v] += other.sn_used[v];
            self.sn_not_used[v] += other.sn_not_used[v];
        }
        self.scored_runs += other.scored_runs;
        self.skipped_runs += other.skipped_runs;
        self
    }

    /// Per-variable effects.
    pub fn effects(&self) -> Vec<VariableEffect> {
        (0..self.variables())
            .map(|v| {
                let mean_sn_used = mean(self.sn_used[v], self.times_used[v]);
                let mean_sn_not_used = mean(self.sn_not_used[v], self.times_not_used[v]);
                // Both levels at -inf (a zero distance in each) leave no gain.
                let gain = match (mean_sn_used, mean_sn_not_used) {
                    (Some(used), Some(not_used)) => Some(used - not_used).filter(|g| !g.is_nan()),
                    _ => None,
                };
                let usefulness = match gain {
                    Some(g) if g >= 0.0 => Usefulness::Useful,
                    Some(_) => Usefulness::NotUseful,
                    None => Usefulness::Indeterminate,
                };

                VariableEffect {
                    variable: v,
                    times_used: self.times_used[v],
                    times_not_used: self.times_not_used[v],
                    mean_sn_used,
                    mean_sn_not_used,
                    gain,
                    usefulness,
                }
            })
            .collect()
    }

    /// Finish into a selection result.
    pub fn finish(self, log_base: LogBase) -> VariableSelection {
        VariableSelection {
            effects: self.effects(),
            runs: self.scored_runs + self.skipped_runs,
            skipped_runs: self.skipped_runs,
            log_base,
        }
    }
}

#[inline]
fn mean(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}
