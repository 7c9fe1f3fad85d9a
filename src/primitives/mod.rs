//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data containers and the error type shared by
//! every other layer:
//! - `Space` and `Sample` value types
//! - `MtsError`
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for all fallible operations.
pub mod errors;

/// Sample and space containers.
pub mod space;
