//! Output types and result structures for the regression pipeline.
//!
//! ## Purpose
//!
//! This module defines the [`RegressionReport`] struct which gathers all
//! outputs of a pipeline run: the fitted line, subset sizes, the held-out
//! predictions, and the accuracy metrics.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Provenance**: The report records the configuration it was produced
//!   under (fields, fraction, seed) so a run can be reproduced from the
//!   report alone.
//!
//! ## Invariants
//!
//! * `predictions` has exactly one entry per test record, in test order.
//! * `train_size + test_size` equals the size of the input dataset.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ols::LinearModel;
use crate::evaluation::metrics::Metrics;

// ============================================================================
// Report Structure
// ============================================================================

/// Complete outcome of one split/fit/predict/evaluate run.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionReport<T> {
    /// Name of the predictor field.
    pub predictor: String,

    /// Name of the target field.
    pub target: String,

    /// The fitted least-squares line.
    pub model: LinearModel<T>,

    /// Number of records in the training subset.
    pub train_size: usize,

    /// Number of records in the test subset.
    pub test_size: usize,

    /// Train inclusion fraction used for the split.
    pub train_fraction: T,

    /// Seed used for the split.
    pub seed: u64,

    /// Predictions for the test subset, in test order.
    pub predictions: Vec<T>,

    /// Accuracy metrics over the test subset.
    pub metrics: Metrics<T>,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for RegressionReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Predictor:      {}", self.predictor)?;
        writeln!(f, "  Target:         {}", self.target)?;
        writeln!(
            f,
            "  Records:        {} (train {}, test {})",
            self.train_size + self.test_size,
            self.train_size,
            self.test_size
        )?;
        writeln!(f, "  Train fraction: {}", self.train_fraction)?;
        writeln!(f, "  Seed:           {}", self.seed)?;
        writeln!(f)?;

        writeln!(f, "Fitted Line:")?;
        writeln!(f, "  Slope:     {:.6}", self.model.slope)?;
        writeln!(f, "  Intercept: {:.6}", self.model.intercept)?;
        writeln!(f)?;

        write!(f, "{}", self.metrics)?;

        Ok(())
    }
}
