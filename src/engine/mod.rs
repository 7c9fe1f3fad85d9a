//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the selection experiment and guards its inputs:
//! - Validation of data and configuration
//! - Execution of the orthogonal-array runs (sequential or parallel)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Selection executor.
pub mod executor;

/// Input and parameter validation.
pub mod validator;
