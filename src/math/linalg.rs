//! Linear algebra backend for MTS.
//!
//! ## Purpose
//!
//! This module provides the dense matrix operations the distance engine
//! needs (matrix product and exact inversion), standardizing on nalgebra.
//!
//! ## Design notes
//!
//! * Buffers are row-major on both sides of the boundary; conversion to
//!   nalgebra's column-major storage happens here.
//! * Inversion uses LU decomposition and reports failure instead of falling
//!   back to a pseudo-inverse: a singular correlation structure must abort
//!   the distance computation.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Invert a row-major `n × n` matrix. Returns `None` if it is singular.
    fn invert_matrix(a: &[Self], n: usize) -> Option<Vec<Self>>;

    /// Multiply a row-major `rows × inner` matrix by an `inner × cols` matrix.
    fn multiply_matrices(a: &[Self], b: &[Self], rows: usize, inner: usize, cols: usize)
        -> Vec<Self>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn invert_matrix(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert_row_major(a, n)
    }
    #[inline]
    fn multiply_matrices(
        a: &[Self],
        b: &[Self],
        rows: usize,
        inner: usize,
        cols: usize,
    ) -> Vec<Self> {
        nalgebra_backend::multiply_row_major(a, b, rows, inner, cols)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn invert_matrix(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert_row_major(a, n)
    }
    #[inline]
    fn multiply_matrices(
        a: &[Self],
        b: &[Self],
        rows: usize,
        inner: usize,
        cols: usize,
    ) -> Vec<Self> {
        nalgebra_backend::multiply_row_major(a, b, rows, inner, cols)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, RealField};

    /// Copy a column-major nalgebra matrix into a row-major buffer.
    fn to_row_major<T: RealField + Copy>(matrix: &DMatrix<T>) -> Vec<T> {
        let (rows, cols) = matrix.shape();
        let mut out = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                out.push(matrix[(i, j)]);
            }
        }
        out
    }

    /// Invert a row-major square matrix with LU decomposition.
    pub fn invert_row_major<T: RealField + Copy>(a: &[T], n: usize) -> Option<Vec<T>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let inverse = matrix.try_inverse()?;

        if inverse.iter().any(|v| !v.is_finite()) {
            return None;
        }

        Some(to_row_major(&inverse))
    }

    /// Multiply two row-major matrices.
    pub fn multiply_row_major<T: RealField + Copy>(
        a: &[T],
        b: &[T],
        rows: usize,
        inner: usize,
        cols: usize,
    ) -> Vec<T> {
        let lhs = DMatrix::from_row_slice(rows, inner, a);
        let rhs = DMatrix::from_row_slice(inner, cols, b);
        to_row_major(&(lhs * rhs))
    }
}
