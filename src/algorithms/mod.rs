//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the MTS algorithms proper:
//! - Standardization into the unit space
//! - Mahalanobis distance through the inverse correlation structure
//! - Two-level orthogonal array generation
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mahalanobis distance engine.
pub mod distance;

/// Orthogonal array generator.
pub mod orthogonal;

/// Standardizer.
pub mod standardize;
