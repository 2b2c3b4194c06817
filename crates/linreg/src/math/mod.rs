//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric building blocks: single-pass
//! accumulation of paired-sample moments and the derived means, variances,
//! and covariances the least-squares fit is built from.
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

/// Single-pass statistical accumulation.
pub mod stats;
