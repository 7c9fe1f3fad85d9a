//! Error types for MTS computations.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate, from container construction up to variable
//! selection.
//!
//! ## Design notes
//!
//! * **Hand-written**: `Display` is implemented manually so the type works
//!   without `std`.
//! * **Comparable**: Errors implement `Clone` and `PartialEq` for use in tests.
//!
//! ## Key concepts
//!
//! * **Structural errors**: Shape and dimension problems (`DimensionMismatch`,
//!   `RaggedRows`, `NotSquare`) are reported before any arithmetic runs.
//! * **Numeric errors**: `SingularMatrix` is raised by the numeric provider and
//!   aborts the computation that needed the inverse.
//!
//! ## Non-goals
//!
//! * Zero-variance variables are not errors; they are absorbed by the
//!   standardizer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors produced while building spaces or running MTS computations.
#[derive(Debug, Clone, PartialEq)]
pub enum MtsError {
    /// A space or sample was built from no values.
    EmptyInput,

    /// A row has a different length than the first row.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// A flat buffer does not match the requested shape.
    InvalidShape {
        /// Buffer length.
        len: usize,
        /// Requested sample count.
        samples: usize,
        /// Requested variable count.
        variables: usize,
    },

    /// Variable counts of two operands disagree.
    DimensionMismatch {
        /// Variable count required by the reference operand.
        expected: usize,
        /// Variable count of the other operand.
        got: usize,
    },

    /// A variable index is outside the space.
    VariableOutOfRange {
        /// Requested variable index.
        index: usize,
        /// Number of variables in the space.
        variables: usize,
    },

    /// A sample index is outside the space.
    SampleOutOfRange {
        /// Requested sample index.
        index: usize,
        /// Number of samples in the space.
        samples: usize,
    },

    /// Not enough samples to estimate the reference statistics.
    TooFewSamples {
        /// Samples available.
        got: usize,
        /// Samples required.
        min: usize,
    },

    /// An inversion was requested for a non-square matrix.
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// The matrix could not be inverted.
    SingularMatrix {
        /// Order of the matrix.
        size: usize,
    },

    /// A value is NaN, infinite or not representable in the working scalar.
    InvalidNumericValue(String),

    /// The variable count cannot produce an orthogonal array.
    InvalidVariableCount(usize),

    /// The level comparison tolerance is outside (0, 0.5).
    InvalidTolerance(f64),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for MtsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::RaggedRows { row, expected, got } => write!(
                f,
                "Ragged rows: row {} has {} values, expected {}",
                row, got, expected
            ),
            Self::InvalidShape {
                len,
                samples,
                variables,
            } => write!(
                f,
                "Invalid shape: {} values cannot form {} samples x {} variables",
                len, samples, variables
            ),
            Self::DimensionMismatch { expected, got } => write!(
                f,
                "Dimension mismatch: expected {} variables, got {}",
                expected, got
            ),
            Self::VariableOutOfRange { index, variables } => write!(
                f,
                "Variable index {} out of range for {} variables",
                index, variables
            ),
            Self::SampleOutOfRange { index, samples } => write!(
                f,
                "Sample index {} out of range for {} samples",
                index, samples
            ),
            Self::TooFewSamples { got, min } => {
                write!(f, "Too few samples: got {}, need at least {}", got, min)
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {} x {}", rows, cols)
            }
            Self::SingularMatrix { size } => {
                write!(f, "Singular matrix: {} x {} matrix has no inverse", size, size)
            }
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::InvalidVariableCount(count) => write!(
                f,
                "Invalid variable count: {} (must be at least 1)",
                count
            ),
            Self::InvalidTolerance(tol) => write!(
                f,
                "Invalid tolerance: {} (must be in range (0, 0.5))",
                tol
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MtsError {}
