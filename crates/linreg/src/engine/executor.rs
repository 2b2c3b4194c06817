//! Pipeline orchestration.
//!
//! ## Purpose
//!
//! This module runs the full regression pipeline over a validated
//! configuration: project the configured columns, split the dataset, fit
//! the line on the training subset, predict the held-out records, and
//! score the predictions.
//!
//! ## Design notes
//!
//! * **Explicit state**: Every stage receives typed arguments and returns a
//!   fresh value; no stage reads anything ambient.
//! * **Validation first**: Cheap contract checks (fields, fraction) run
//!   before the split; subset and finiteness checks run as soon as the
//!   data they concern exists.
//!
//! ## Invariants
//!
//! * A run is deterministic given the dataset, configuration, and seed.
//! * Errors surface immediately; no stage runs after a failure.
//!
//! ## Non-goals
//!
//! * This module does not load data (see the `data` module).
//! * This module does not implement the numerics it orchestrates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ols::LinearModel;
use crate::engine::output::RegressionReport;
use crate::engine::validator::Validator;
use crate::evaluation::metrics::Metrics;
use crate::evaluation::split::holdout;
use crate::math::stats::MomentAccumulator;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::LinregError;

// ============================================================================
// Pipeline Configuration
// ============================================================================

/// Validated configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig<T> {
    /// Name of the predictor field.
    pub predictor: String,

    /// Name of the target field.
    pub target: String,

    /// Train inclusion probability in (0, 1].
    pub train_fraction: T,

    /// Seed for the split.
    pub seed: u64,
}

// ============================================================================
// Pipeline Execution
// ============================================================================

/// Executor for the split/fit/predict/evaluate pipeline.
pub struct Pipeline;

impl Pipeline {
    /// Run the full pipeline over a dataset.
    pub fn run<T: Float + MomentAccumulator>(
        dataset: &Dataset<T>,
        config: &PipelineConfig<T>,
    ) -> Result<RegressionReport<T>, LinregError> {
        Validator::validate_fraction(config.train_fraction)?;
        Validator::validate_dataset(dataset)?;
        Validator::validate_field(dataset, &config.predictor)?;
        Validator::validate_field(dataset, &config.target)?;

        let (train, test) = holdout(dataset, config.train_fraction, config.seed);
        Validator::validate_subset("train", train.len())?;
        Validator::validate_subset("test", test.len())?;

        let train_x = train.column(&config.predictor)?;
        let train_y = train.column(&config.target)?;
        Validator::validate_inputs(&train_x, &train_y)?;
        let model = LinearModel::fit(&train_x, &train_y)?;

        let test_x = test.column(&config.predictor)?;
        let test_y = test.column(&config.target)?;
        let predictions = model.predict_many(&test_x);
        let metrics = Metrics::compute(&test_y, &predictions)?;

        Ok(RegressionReport {
            predictor: config.predictor.clone(),
            target: config.target.clone(),
            model,
            train_size: train.len(),
            test_size: test.len(),
            train_fraction: config.train_fraction,
            seed: config.seed,
            predictions,
            metrics,
        })
    }
}
