//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numeric collaborators of the MTS engine:
//! - Dense matrix product and inversion (nalgebra backend)
//! - Mean and Pearson correlation
//! - The `MtsProvider` capability bundle tying them to a working type
//!
//! These are reusable building blocks with no MTS-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend.
pub mod linalg;

/// Numeric operations provider trait and default implementation.
pub mod provider;

/// Mean and correlation.
pub mod statistics;
