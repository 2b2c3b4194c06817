//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the core numeric algorithm: the closed-form ordinary
//! least-squares fit and the prediction it enables.

/// Ordinary least-squares fitting and prediction.
pub mod ols;
