//! # MTS — Mahalanobis-Taguchi System for Rust
//!
//! A `no_std`-capable implementation of the Mahalanobis-Taguchi System:
//! multivariate anomaly scoring against a reference population, and
//! orthogonal-array experiments that decide which variables actually help
//! tell abnormal observations apart from normal ones.
//!
//! ## What is MTS?
//!
//! The Mahalanobis-Taguchi System combines two ideas:
//!
//! 1. **Mahalanobis distance** measures how far an observation lies from the
//!    center of a reference ("normal") population, taking the scale and the
//!    correlations of the variables into account.
//! 2. **Taguchi orthogonal arrays** switch variables on and off in a small,
//!    balanced set of runs. Each run's signal-to-noise ratio shows whether
//!    the variables it kept separate abnormal samples from the reference.
//!
//! **Common applications:**
//! - Quality inspection and process monitoring
//! - Fault detection on multi-sensor equipment
//! - Medical and financial screening with many candidate indicators
//! - Reducing the number of measured variables without losing discrimination
//!
//! ## Quick Start
//!
//! ```rust
//! use mts_rs::prelude::*;
//!
//! // Reference ("normal") population: 5 samples x 3 variables
//! let reference = Space::from_rows(&[
//!     [1.0, 2.0, 3.0],
//!     [2.0, 1.0, 4.0],
//!     [3.0, 3.0, 2.0],
//!     [4.0, 5.0, 5.0],
//!     [5.0, 4.0, 1.0],
//! ])?;
//!
//! let mts = Mts::builder().build()?;
//!
//! // Distance of one observation from the reference population
//! let d = mts.distance(&reference, &Sample::new(vec![3.0, 3.0, 3.0])?)?;
//! assert!(d >= 0.0);
//!
//! // Which variables separate the abnormal samples from the reference?
//! let abnormal = Space::from_rows(&[[10.0, 2.0, 9.0], [12.0, 1.0, 8.0]])?;
//! let selection = mts.select_useful_variables(&reference, &abnormal)?;
//! assert_eq!(selection.is_useful().len(), 3);
//! # Result::<(), MtsError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, MtsError>`.
//!
//! - **`Ok(..)`**: The computed value (distance, Z-vector, selection, ...).
//! - **`Err(MtsError)`**: A failure such as a dimension mismatch between a
//!   sample and the reference space, or a singular correlation matrix.
//!
//! ```rust
//! use mts_rs::prelude::*;
//! # let reference = Space::from_rows(&[[1.0, 2.0], [2.0, 1.0], [3.0, 5.0]])?;
//!
//! let mts = Mts::builder().build()?;
//! let wrong = Sample::new(vec![1.0, 2.0, 3.0])?;
//!
//! match mts.distance(&reference, &wrong) {
//!     Ok(d) => println!("distance: {}", d),
//!     Err(e) => assert_eq!(e, MtsError::DimensionMismatch { expected: 2, got: 3 }),
//! }
//! # Result::<(), MtsError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency; the
//! crate then only needs `alloc`:
//!
//! ```toml
//! [dependencies]
//! mts-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Parameters
//!
//! | Parameter           | Default   | Range/Options          | Description                                    |
//! |---------------------|-----------|------------------------|------------------------------------------------|
//! | **provider**        | Nalgebra  | any `MtsProvider<T>`   | Arithmetic, correlation and matrix operations  |
//! | **log_base**        | `Decimal` | `Decimal`, `Natural`   | Logarithm base of the signal-to-noise ratio    |
//! | **level_tolerance** | 1e-6      | (0, 0.5)               | Tolerance when reading levels of the array     |
//! | **parallel**        | false     | true/false             | Score runs on the rayon pool (`parallel` feature) |
//!
//! Setting a parameter twice is rejected by `.build()` with
//! [`MtsError::DuplicateParameter`](prelude::MtsError::DuplicateParameter).
//!
//! ## Variable Selection
//!
//! For `v` variables the selection experiment uses a two-level orthogonal
//! array: the fixed L12 design for 8 to 11 variables, otherwise an algebraic
//! design with `next_power_of_two(v + 1)` runs. In every run the reference
//! and abnormal spaces are masked to the variables the run keeps, and the
//! run is scored with a larger-the-better signal-to-noise ratio:
//!
//! ```text
//! SN = -10 · log( Σ (1 / D_s) / n )
//! ```
//!
//! A variable is useful when the mean ratio of the runs that kept it is at
//! least the mean ratio of the runs that dropped it.
//!
//! ```rust
//! use mts_rs::prelude::*;
//! # let reference = Space::from_rows(&[
//! #     [1.0, 2.0, 3.0], [2.0, 1.0, 4.0], [3.0, 3.0, 2.0], [4.0, 5.0, 5.0], [5.0, 4.0, 1.0],
//! # ])?;
//!
//! let mts = Mts::builder().log_base(Natural).build()?;
//!
//! let abnormal = Sample::new(vec![10.0, 4.0, 2.0])?;
//! let selection = mts.select_useful_variables_for_sample(&reference, &abnormal)?;
//!
//! for effect in &selection.effects {
//!     println!("variable {}: {:?} (gain {:?})", effect.variable, effect.usefulness, effect.gain);
//! }
//! # Result::<(), MtsError>::Ok(())
//! ```
//!
//! ## Custom Arithmetic
//!
//! All arithmetic goes through an [`MtsProvider`](prelude::MtsProvider).
//! The shipped [`NalgebraProvider`](prelude::NalgebraProvider) covers `f32`
//! and `f64`; any other scalar representation can be plugged in with
//! `.provider(..)` on the builder.
//!
//! ## References
//!
//! - Taguchi, G. & Jugulum, R. (2002). "The Mahalanobis-Taguchi Strategy: A Pattern Technology System"
//! - Mahalanobis, P. C. (1936). "On the Generalised Distance in Statistics"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the `Space` and `Sample` containers and the crate error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains statistics (mean, Pearson correlation), dense linear algebra
// and the numeric provider abstraction.
mod math;

// Layer 3: Algorithms - core MTS algorithms.
//
// Contains standardization, the Mahalanobis distance model and the
// orthogonal array generator.
mod algorithms;

// Layer 4: Evaluation - scoring and aggregation.
//
// Contains the signal-to-noise ratio and per-variable effects.
mod evaluation;

// Layer 5: Engine - orchestration and validation.
//
// Contains the selection executor and input validation.
mod engine;

// High-level fluent API.
//
// Provides the `Mts` handle and its builder.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard MTS prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use mts_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        FloatLinalg,
        LogBase::{self, Decimal, Natural},
        MahalanobisModel, Mts, MtsBuilder, MtsError, MtsProvider, NalgebraProvider,
        ReferenceMoments, Sample, SelectionConfig, Space,
        Usefulness::{self, Indeterminate, NotUseful, Useful},
        VariableEffect, VariableSelection,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and scoring.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
