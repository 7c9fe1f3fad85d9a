//! Two-level orthogonal arrays for variable selection.
//!
//! ## Purpose
//!
//! This module generates the fractional-factorial design that decides which
//! variables take part in each run of the selection experiment. Entries are
//! level 1 ("variable included") or level 2 ("variable excluded").
//!
//! ## Design notes
//!
//! * **L12 exception**: For 8 to 11 variables the fixed 12-run L12 table is
//!   returned as is; the power-of-two construction has no 12-run form.
//! * **Doubling construction**: Every other variable count uses a
//!   `2^k`-run array built from its power-of-two (basis) columns.
//! * **Provider arithmetic**: Levels are built with the provider's `add`,
//!   `modulo` and `cast_int`, so the array lives in the working type.
//!
//! ## Key concepts
//!
//! * **Basis column** `c = 2^k`: toggles between 0 and 1 every
//!   `runs / (2c)` rows, starting at 0.
//! * **Interaction column** `c`: sum modulo 2 of the basis columns in its
//!   binary decomposition (column 5 = column 1 + column 4).
//! * **Level shift**: Adding 1 maps {0, 1} onto {1, 2}.
//!
//! ```text
//! 3 variables → 4 runs:
//!   1 1 1
//!   1 2 2
//!   2 1 2
//!   2 2 1
//! ```
//!
//! ## Invariants
//!
//! * Every column has as many level-1 as level-2 entries.
//! * The generated array has at least as many columns as variables.
//!
//! ## Non-goals
//!
//! * This module does not build mixed-level or three-level arrays.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::provider::MtsProvider;
use crate::primitives::errors::MtsError;
use crate::primitives::space::Space;

// ============================================================================
// Constants
// ============================================================================

/// Level marking a variable as included in a run.
pub const INCLUDED_LEVEL: i32 = 1;

/// Level marking a variable as excluded from a run.
pub const EXCLUDED_LEVEL: i32 = 2;

/// Default tolerance when comparing an array entry to `INCLUDED_LEVEL`.
pub const DEFAULT_LEVEL_TOLERANCE: f64 = 1e-6;

/// The L12 orthogonal array (12 runs, 11 two-level columns).
pub const L12: [[u8; 11]; 12] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2],
    [1, 1, 2, 2, 2, 1, 1, 1, 2, 2, 2],
    [1, 2, 1, 2, 2, 1, 2, 2, 1, 1, 2],
    [1, 2, 2, 1, 2, 2, 1, 2, 1, 2, 1],
    [1, 2, 2, 2, 1, 2, 2, 1, 2, 1, 1],
    [2, 1, 2, 2, 1, 1, 2, 2, 1, 2, 1],
    [2, 1, 2, 1, 2, 2, 2, 1, 1, 1, 2],
    [2, 1, 1, 2, 2, 2, 1, 2, 2, 1, 1],
    [2, 2, 2, 1, 1, 1, 1, 2, 2, 1, 2],
    [2, 2, 1, 2, 1, 2, 1, 1, 1, 2, 2],
    [2, 2, 1, 1, 2, 1, 2, 1, 2, 2, 1],
];

/// Variable counts served by the L12 table.
const L12_VARIABLES: core::ops::Range<usize> = 8..12;

// ============================================================================
// Power-of-Two Helpers
// ============================================================================

/// Smallest power of two greater than or equal to `n`.
///
/// Zero and negative inputs map to 1.
#[inline]
pub fn ceiling_to_power_of_two(n: i64) -> usize {
    if n <= 0 {
        1
    } else {
        (n as u64).next_power_of_two() as usize
    }
}

/// Whether `n` is a non-zero power of two.
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n.is_power_of_two()
}

/// Number of runs of the array generated for `variables`.
#[inline]
pub fn runs_for(variables: usize) -> usize {
    if L12_VARIABLES.contains(&variables) {
        L12.len()
    } else {
        ceiling_to_power_of_two(variables as i64 + 1)
    }
}

// ============================================================================
// Generation
// ============================================================================

/// The L12 table converted into the working type.
pub fn l12<T, P>(provider: &P) -> Result<Space<T>, MtsError>
where
    T: Copy,
    P: MtsProvider<T>,
{
    let mut values = Vec::with_capacity(L12.len() * L12[0].len());
    for row in L12.iter() {
        for &level in row.iter() {
            values.push(provider.cast_int(i32::from(level))?);
        }
    }
    Space::from_row_major(values, L12.len(), L12[0].len())
}

/// Generate the orthogonal array for `variables` factors.
pub fn generate<T, P>(provider: &P, variables: usize) -> Result<Space<T>, MtsError>
where
    T: Copy,
    P: MtsProvider<T>,
{
    if variables == 0 {
        return Err(MtsError::InvalidVariableCount(variables));
    }
    if L12_VARIABLES.contains(&variables) {
        return l12(provider);
    }

    let runs = runs_for(variables);
    let binary = [provider.cast_int(0)?, provider.cast_int(1)?];
    let two = provider.cast_int(2)?;

    let mut oa = vec![binary[0]; runs * runs];

    for column in 1..runs {
        if is_power_of_two(column) {
            let period = runs / (2 * column);
            let mut value = 1usize;
            for row in 0..runs {
                if period != 0 && row % period == 0 {
                    value ^= 1;
                }
                oa[row * runs + column] = binary[value];
            }
        } else {
            for row in 0..runs {
                let cell = row * runs + column;
                let mut basis = 1;
                while basis < column {
                    if column & basis == basis {
                        let sum = provider.add(oa[cell], oa[row * runs + basis]);
                        oa[cell] = provider.modulo(sum, two);
                    }
                    basis <<= 1;
                }
            }
        }
    }

    let one = binary[1];
    for level in oa.iter_mut() {
        *level = provider.add(*level, one);
    }

    Space::from_row_major(oa, runs, runs)?.without_variable(0)
}

// ============================================================================
// Inspection
// ============================================================================

/// Whether an array entry denotes the included level.
///
/// Any entry farther than `tolerance` from `INCLUDED_LEVEL`, including
/// `EXCLUDED_LEVEL`, reads as excluded.
#[inline]
pub fn is_included<T, P>(provider: &P, level: T, tolerance: f64) -> bool
where
    T: Copy,
    P: MtsProvider<T>,
{
    let distance = provider.to_f64(level) - f64::from(INCLUDED_LEVEL);
    distance < tolerance && distance > -tolerance
}

/// Inclusion flags of the first `variables` columns of one run.
pub fn included_mask<T, P>(
    provider: &P,
    oa: &Space<T>,
    run: usize,
    variables: usize,
    tolerance: f64,
) -> Result<Vec<bool>, MtsError>
where
    T: Copy,
    P: MtsProvider<T>,
{
    if variables > oa.variables() {
        return Err(MtsError::DimensionMismatch {
            expected: variables,
            got: oa.variables(),
        });
    }
    if run >= oa.samples() {
        return Err(MtsError::SampleOutOfRange {
            index: run,
            samples: oa.samples(),
        });
    }

    Ok(oa.row(run)[..variables]
        .iter()
        .map(|&level| is_included(provider, level, tolerance))
        .collect())
}

/// Count of (included, excluded) entries in one column.
pub fn column_balance<T, P>(
    provider: &P,
    oa: &Space<T>,
    column: usize,
    tolerance: f64,
) -> Result<(usize, usize), MtsError>
where
    T: Copy,
    P: MtsProvider<T>,
{
    let levels = oa.variable(column)?;
    let included = levels
        .iter()
        .filter(|&&level| is_included(provider, level, tolerance))
        .count();
    Ok((included, levels.len() - included))
}
