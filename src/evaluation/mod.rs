//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns distances into decisions:
//! - Signal-to-noise ratio of a selection run
//! - Per-variable effect aggregation and verdicts
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-variable effects and selection results.
pub mod effects;

/// Signal-to-noise ratio.
pub mod signal;
