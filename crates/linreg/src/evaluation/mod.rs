//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer covers everything around the fit itself: partitioning data
//! into train/test subsets and scoring predictions against held-out
//! targets.

/// Seeded holdout splitting.
pub mod split;

/// Accuracy metrics for predictions.
pub mod metrics;
