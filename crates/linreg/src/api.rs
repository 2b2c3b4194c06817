//! High-level API for the regression pipeline.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring and running the whole pipeline, and the four
//! free functions — [`split`], [`fit`], [`predict`], [`evaluate`] — for
//! driving the stages individually.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (train fraction
//!   0.8, seed 0).
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   duplicate parameter settings are rejected.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LinregBuilder`] via `Linreg::new()`.
//! 2. Chain configuration methods (`.predictor()`, `.target()`, …).
//! 3. Call `.build()` to obtain a validated [`Regression`].
//! 4. Call `.run(&dataset)` to produce a [`RegressionReport`].

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
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{Pipeline, PipelineConfig};
use crate::engine::validator::Validator;
use crate::evaluation::split::holdout;
use crate::math::stats::MomentAccumulator;

// Publicly re-exported types
pub use crate::algorithms::ols::LinearModel;
pub use crate::engine::output::RegressionReport;
pub use crate::evaluation::metrics::Metrics;
pub use crate::primitives::dataset::{Dataset, Record};
pub use crate::primitives::errors::LinregError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a regression pipeline.
#[derive(Debug, Clone)]
pub struct LinregBuilder<T> {
    /// Name of the predictor field.
    pub predictor: Option<String>,

    /// Name of the target field.
    pub target: Option<String>,

    /// Train inclusion probability in (0, 1].
    pub train_fraction: Option<T>,

    /// Seed for the split.
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LinregBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinregBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            predictor: None,
            target: None,
            train_fraction: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the predictor field name.
    pub fn predictor<S: Into<String>>(mut self, name: S) -> Self {
        if self.predictor.is_some() {
            self.duplicate_param = Some("predictor");
        }
        self.predictor = Some(name.into());
        self
    }

    /// Set the target field name.
    pub fn target<S: Into<String>>(mut self, name: S) -> Self {
        if self.target.is_some() {
            self.duplicate_param = Some("target");
        }
        self.target = Some(name.into());
        self
    }

    /// Set the train inclusion fraction (default 0.8).
    pub fn train_fraction(mut self, fraction: T) -> Self {
        if self.train_fraction.is_some() {
            self.duplicate_param = Some("train_fraction");
        }
        self.train_fraction = Some(fraction);
        self
    }

    /// Set the split seed (default 0).
    ///
    /// The same seed always produces the same partition; vary it to draw a
    /// different split.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and build a runnable [`Regression`].
    pub fn build(self) -> Result<Regression<T>, LinregError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let predictor = self.predictor.ok_or(LinregError::MissingParameter {
            parameter: "predictor",
        })?;
        let target = self.target.ok_or(LinregError::MissingParameter {
            parameter: "target",
        })?;

        let train_fraction = self
            .train_fraction
            .unwrap_or_else(|| T::from(0.8).unwrap_or(T::one()));
        Validator::validate_fraction(train_fraction)?;

        Ok(Regression {
            config: PipelineConfig {
                predictor,
                target,
                train_fraction,
                seed: self.seed.unwrap_or(0),
            },
        })
    }
}

// ============================================================================
// Runnable Pipeline
// ============================================================================

/// A validated, runnable regression pipeline.
pub struct Regression<T> {
    config: PipelineConfig<T>,
}

impl<T: Float + MomentAccumulator> Regression<T> {
    /// Run split → fit → predict → evaluate over a dataset.
    pub fn run(&self, dataset: &Dataset<T>) -> Result<RegressionReport<T>, LinregError> {
        Pipeline::run(dataset, &self.config)
    }
}

impl<T: Float> Regression<T> {
    /// The validated pipeline configuration.
    pub fn config(&self) -> &PipelineConfig<T> {
        &self.config
    }
}

// Re-export the configuration type alongside its consumer.
pub use crate::engine::executor::PipelineConfig as RegressionConfig;

// ============================================================================
// Function Surface
// ============================================================================

/// Partition a dataset into disjoint (train, test) subsets.
///
/// Each record goes to train with independent probability `train_fraction`
/// drawn from a generator seeded with `seed`; the fraction must lie in
/// (0, 1]. A fraction of exactly 1.0 sends every record to train.
pub fn split<T: Float>(
    dataset: &Dataset<T>,
    train_fraction: T,
    seed: u64,
) -> Result<(Dataset<T>, Dataset<T>), LinregError> {
    Validator::validate_fraction(train_fraction)?;
    Ok(holdout(dataset, train_fraction, seed))
}

/// Fit a least-squares line to two named fields of a training dataset.
pub fn fit<T: Float + MomentAccumulator>(
    train: &Dataset<T>,
    predictor: &str,
    target: &str,
) -> Result<LinearModel<T>, LinregError> {
    let x = train.column(predictor)?;
    let y = train.column(target)?;
    Validator::validate_inputs(&x, &y)?;
    LinearModel::fit(&x, &y)
}

/// Apply a fitted line to a sequence of predictor values.
///
/// Pure and order-preserving: `output[i]` is the prediction for `values[i]`.
pub fn predict<T: Float>(model: &LinearModel<T>, values: &[T]) -> Vec<T> {
    model.predict_many(values)
}

/// Score predictions against true values.
///
/// Arguments follow the conventional `(actual, predicted)` order.
pub fn evaluate<T: Float>(actual: &[T], predicted: &[T]) -> Result<Metrics<T>, LinregError> {
    Metrics::compute(actual, predicted)
}
