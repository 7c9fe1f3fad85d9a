//! Numeric operations provider.
//!
//! ## Purpose
//!
//! This module defines the capability bundle the MTS engine is generic over.
//! Every piece of scalar arithmetic the engine performs on its working type
//! (casting, level arithmetic, correlation, matrix product and inversion)
//! goes through an `MtsProvider`, so the engine itself never assumes a
//! concrete scalar representation.
//!
//! ## Design notes
//!
//! * **Strategy object**: A provider is injected into the builder and shared
//!   by reference across runs; it must be `Sync` for parallel selection.
//! * **Fallible boundaries**: Casting, correlation, multiplication and
//!   inversion return `Result`; `add` and `modulo` are total.
//! * **Default backend**: `NalgebraProvider` covers `f32` and `f64`.
//!
//! ## Key concepts
//!
//! * **Level arithmetic**: `add`, `modulo` and `cast_int` are only used to
//!   build the {0, 1} → {1, 2} orthogonal array.
//! * **Statistics**: `mean` returns `f64` because standardization is done in
//!   double precision before casting back to the working type.

// External dependencies
use core::fmt::Debug;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::math::statistics;
use crate::primitives::errors::MtsError;
use crate::primitives::space::Space;

// ============================================================================
// Provider Trait
// ============================================================================

/// Scalar and matrix operations over a working type `T`.
pub trait MtsProvider<T>: Debug + Send + Sync {
    /// Matrix product `lhs · rhs`.
    ///
    /// Fails with `DimensionMismatch` when `lhs.variables() != rhs.samples()`.
    fn multiply(&self, lhs: &Space<T>, rhs: &Space<T>) -> Result<Space<T>, MtsError>;

    /// Inverse of a square matrix.
    ///
    /// Fails with `NotSquare` or `SingularMatrix`; never returns a
    /// meaningless result.
    fn invert(&self, matrix: &Space<T>) -> Result<Space<T>, MtsError>;

    /// Pearson correlation of two equal-length arrays (length >= 2).
    fn correlate(&self, a: &[T], b: &[T]) -> Result<T, MtsError>;

    /// Arithmetic mean of the values.
    fn mean(&self, values: &[T]) -> f64;

    /// Convert an integer into the working type.
    fn cast_int(&self, value: i32) -> Result<T, MtsError>;

    /// Convert a double into the working type.
    fn cast_f64(&self, value: f64) -> Result<T, MtsError>;

    /// Convert a working value into a double.
    fn to_f64(&self, value: T) -> f64;

    /// `a + b`.
    fn add(&self, a: T, b: T) -> T;

    /// `dividend mod divisor`.
    fn modulo(&self, dividend: T, divisor: T) -> T;
}

// ============================================================================
// Nalgebra Provider
// ============================================================================

/// Default provider for `f32` and `f64`, backed by nalgebra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NalgebraProvider;

impl<T: FloatLinalg> MtsProvider<T> for NalgebraProvider {
    fn multiply(&self, lhs: &Space<T>, rhs: &Space<T>) -> Result<Space<T>, MtsError> {
        if lhs.variables() != rhs.samples() {
            return Err(MtsError::DimensionMismatch {
                expected: lhs.variables(),
                got: rhs.samples(),
            });
        }

        let product = T::multiply_matrices(
            lhs.as_slice(),
            rhs.as_slice(),
            lhs.samples(),
            lhs.variables(),
            rhs.variables(),
        );

        Space::from_row_major(product, lhs.samples(), rhs.variables())
    }

    fn invert(&self, matrix: &Space<T>) -> Result<Space<T>, MtsError> {
        let n = matrix.samples();
        if n != matrix.variables() {
            return Err(MtsError::NotSquare {
                rows: n,
                cols: matrix.variables(),
            });
        }

        let inverse =
            T::invert_matrix(matrix.as_slice(), n).ok_or(MtsError::SingularMatrix { size: n })?;

        Space::from_row_major(inverse, n, n)
    }

    #[inline]
    fn correlate(&self, a: &[T], b: &[T]) -> Result<T, MtsError> {
        statistics::pearson(a, b)
    }

    #[inline]
    fn mean(&self, values: &[T]) -> f64 {
        statistics::mean(values)
    }

    #[inline]
    fn cast_int(&self, value: i32) -> Result<T, MtsError> {
        T::from(value).ok_or_else(|| MtsError::InvalidNumericValue(format!("{}", value)))
    }

    #[inline]
    fn cast_f64(&self, value: f64) -> Result<T, MtsError> {
        T::from(value).ok_or_else(|| MtsError::InvalidNumericValue(format!("{}", value)))
    }

    #[inline]
    fn to_f64(&self, value: T) -> f64 {
        value.to_f64().unwrap_or(f64::NAN)
    }

    #[inline]
    fn add(&self, a: T, b: T) -> T {
        a + b
    }

    #[inline]
    fn modulo(&self, dividend: T, divisor: T) -> T {
        dividend % divisor
    }
}
