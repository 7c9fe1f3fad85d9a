//! Sample and space containers.
//!
//! ## Purpose
//!
//! This module provides the two value types every MTS computation operates
//! on: a `Space` (samples × variables, row-major) and a `Sample` (one
//! observation). It also provides the constructors that replace a separate
//! factory: building from rows, from a flat buffer, and turning a sample into
//! a row or column matrix.
//!
//! ## Design notes
//!
//! * **Owned storage**: Every constructor copies its input; no space aliases
//!   another.
//! * **Pure derivation**: Removing or selecting variables returns a new space
//!   and leaves the source untouched.
//! * **Row-major**: A sample is a contiguous slice, so per-sample access is
//!   free and column extraction allocates.
//!
//! ## Invariants
//!
//! * `samples >= 1` and `variables >= 1`.
//! * `values.len() == samples * variables`.
//!
//! ## Non-goals
//!
//! * This module does not perform arithmetic on the stored values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::ops::Index;

// Internal dependencies
use crate::primitives::errors::MtsError;

// ============================================================================
// Sample
// ============================================================================

/// A single observation: one value per variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<T> {
    values: Vec<T>,
}

impl<T: Copy> Sample<T> {
    /// Build a sample from owned values.
    pub fn new(values: Vec<T>) -> Result<Self, MtsError> {
        if values.is_empty() {
            return Err(MtsError::EmptyInput);
        }
        Ok(Self { values })
    }

    /// Build a sample by copying a slice.
    pub fn from_slice(values: &[T]) -> Result<Self, MtsError> {
        Self::new(values.to_vec())
    }

    /// Number of variables in the sample.
    #[inline]
    pub fn variables(&self) -> usize {
        self.values.len()
    }

    /// Value of a variable, if in range.
    #[inline]
    pub fn get(&self, variable: usize) -> Option<T> {
        self.values.get(variable).copied()
    }

    /// Borrow the values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consume the sample and return its values.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Derive a sample keeping only the given variables, in the given order.
    pub fn select_variables(&self, indices: &[usize]) -> Result<Self, MtsError> {
        let mut values = Vec::with_capacity(indices.len());
        for &index in indices {
            let value = self.get(index).ok_or(MtsError::VariableOutOfRange {
                index,
                variables: self.variables(),
            })?;
            values.push(value);
        }
        Self::new(values)
    }
}

impl<T> Index<usize> for Sample<T> {
    type Output = T;

    #[inline]
    fn index(&self, variable: usize) -> &T {
        &self.values[variable]
    }
}

// ============================================================================
// Space
// ============================================================================

/// A rectangular collection of samples over the same variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Space<T> {
    values: Vec<T>,
    samples: usize,
    variables: usize,
}

impl<T: Copy> Space<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a space from rows of equal length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MtsError> {
        let first = rows.first().ok_or(MtsError::EmptyInput)?.as_ref().len();
        if first == 0 {
            return Err(MtsError::EmptyInput);
        }

        let mut values = Vec::with_capacity(rows.len() * first);
        for (row, values_in_row) in rows.iter().enumerate() {
            let values_in_row = values_in_row.as_ref();
            if values_in_row.len() != first {
                return Err(MtsError::RaggedRows {
                    row,
                    expected: first,
                    got: values_in_row.len(),
                });
            }
            values.extend_from_slice(values_in_row);
        }

        Ok(Self {
            values,
            samples: rows.len(),
            variables: first,
        })
    }

    /// Build a space from a row-major buffer.
    pub fn from_row_major(
        values: Vec<T>,
        samples: usize,
        variables: usize,
    ) -> Result<Self, MtsError> {
        if samples == 0 || variables == 0 || values.len() != samples * variables {
            return Err(MtsError::InvalidShape {
                len: values.len(),
                samples,
                variables,
            });
        }
        Ok(Self {
            values,
            samples,
            variables,
        })
    }

    /// Column matrix (n × 1) holding the sample's values.
    pub fn single_variable(sample: &Sample<T>) -> Self {
        Self {
            values: sample.as_slice().to_vec(),
            samples: sample.variables(),
            variables: 1,
        }
    }

    /// Row matrix (1 × n) holding the sample's values.
    pub fn single_sample(sample: &Sample<T>) -> Self {
        Self {
            values: sample.as_slice().to_vec(),
            samples: 1,
            variables: sample.variables(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of samples (rows).
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of variables (columns).
    #[inline]
    pub fn variables(&self) -> usize {
        self.variables
    }

    /// Value at `(sample, variable)`, if in range.
    #[inline]
    pub fn get(&self, sample: usize, variable: usize) -> Option<T> {
        if sample < self.samples && variable < self.variables {
            Some(self.values[sample * self.variables + variable])
        } else {
            None
        }
    }

    /// Borrow one sample's values.
    ///
    /// Panics if `sample` is out of range.
    #[inline]
    pub fn row(&self, sample: usize) -> &[T] {
        let start = sample * self.variables;
        &self.values[start..start + self.variables]
    }

    /// Iterate over the samples as slices.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.values.chunks_exact(self.variables)
    }

    /// Copy one sample out of the space.
    pub fn sample(&self, sample: usize) -> Result<Sample<T>, MtsError> {
        if sample >= self.samples {
            return Err(MtsError::SampleOutOfRange {
                index: sample,
                samples: self.samples,
            });
        }
        Sample::from_slice(self.row(sample))
    }

    /// Extract all values of one variable (a column).
    pub fn variable(&self, variable: usize) -> Result<Vec<T>, MtsError> {
        if variable >= self.variables {
            return Err(MtsError::VariableOutOfRange {
                index: variable,
                variables: self.variables,
            });
        }
        Ok(self.rows().map(|row| row[variable]).collect())
    }

    /// Borrow the row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    // ========================================================================
    // Derivation
    // ========================================================================

    /// Derive a space without one variable.
    pub fn without_variable(&self, variable: usize) -> Result<Self, MtsError> {
        if variable >= self.variables {
            return Err(MtsError::VariableOutOfRange {
                index: variable,
                variables: self.variables,
            });
        }
        let keep: Vec<usize> = (0..self.variables).filter(|&v| v != variable).collect();
        self.select_variables(&keep)
    }

    /// Derive a space keeping only the given variables, in the given order.
    pub fn select_variables(&self, indices: &[usize]) -> Result<Self, MtsError> {
        if indices.is_empty() {
            return Err(MtsError::EmptyInput);
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= self.variables) {
            return Err(MtsError::VariableOutOfRange {
                index,
                variables: self.variables,
            });
        }

        let mut values = Vec::with_capacity(self.samples * indices.len());
        for row in self.rows() {
            values.extend(indices.iter().map(|&v| row[v]));
        }

        Ok(Self {
            values,
            samples: self.samples,
            variables: indices.len(),
        })
    }
}

impl<T> Index<(usize, usize)> for Space<T> {
    type Output = T;

    #[inline]
    fn index(&self, (sample, variable): (usize, usize)) -> &T {
        assert!(variable < self.variables, "variable index out of range");
        &self.values[sample * self.variables + variable]
    }
}
