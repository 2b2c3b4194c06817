//! Per-field descriptive summaries.
//!
//! ## Purpose
//!
//! This module computes count, mean, standard deviation, minimum, and
//! maximum for every field of a dataset — the quick look a workflow takes
//! before choosing a predictor.
//!
//! ## Design notes
//!
//! * **Single pass per field**: Each summary folds over one column once,
//!   keeping only running sums and extremes.
//! * **NaN for the undefined**: An empty column reports NaN statistics; a
//!   single-record column reports a NaN standard deviation (the sample
//!   estimator needs two values).
//!
//! ## Non-goals
//!
//! * This module does not compute quantiles or histograms.
//! * This module does not mutate or filter the dataset.

use std::fmt::{self, Display, Formatter};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Dataset;

// ============================================================================
// Field Summary
// ============================================================================

/// Descriptive statistics for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary<T> {
    /// Field name.
    pub field: String,

    /// Number of records.
    pub count: usize,

    /// Arithmetic mean.
    pub mean: T,

    /// Sample standard deviation (NaN below two records).
    pub std_dev: T,

    /// Smallest value.
    pub min: T,

    /// Largest value.
    pub max: T,
}

// ============================================================================
// Dataset Summary
// ============================================================================

/// Descriptive statistics for every field of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<T> {
    summaries: Vec<FieldSummary<T>>,
}

impl<T: Float> Summary<T> {
    /// Summarize every field of a dataset.
    pub fn describe(dataset: &Dataset<T>) -> Self {
        let summaries = dataset
            .fields()
            .iter()
            .enumerate()
            .map(|(idx, field)| Self::describe_field(dataset, idx, field))
            .collect();

        Self { summaries }
    }

    fn describe_field(dataset: &Dataset<T>, idx: usize, field: &str) -> FieldSummary<T> {
        let mut count = 0usize;
        let mut sum = T::zero();
        let mut sum_sq = T::zero();
        let mut min = T::infinity();
        let mut max = T::neg_infinity();

        for record in dataset.records() {
            let value = record.values()[idx];
            count += 1;
            sum = sum + value;
            sum_sq = sum_sq + value * value;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return FieldSummary {
                field: field.into(),
                count: 0,
                mean: T::nan(),
                std_dev: T::nan(),
                min: T::nan(),
                max: T::nan(),
            };
        }

        let n_t = T::from(count).unwrap_or(T::one());
        let mean = sum / n_t;

        // Sample variance: (Σv² − (Σv)²/n) / (n − 1)
        let std_dev = if count > 1 {
            let variance = (sum_sq - (sum * sum) / n_t) / (n_t - T::one());
            variance.max(T::zero()).sqrt()
        } else {
            T::nan()
        };

        FieldSummary {
            field: field.into(),
            count,
            mean,
            std_dev,
            min,
            max,
        }
    }

    /// Look up the summary for one field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSummary<T>> {
        self.summaries.iter().find(|s| s.field == name)
    }

    /// All field summaries, in dataset field order.
    pub fn fields(&self) -> &[FieldSummary<T>] {
        &self.summaries
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Summary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<24} {:>8} {:>12} {:>12} {:>12} {:>12}",
            "Field", "Count", "Mean", "Std", "Min", "Max"
        )?;
        writeln!(f, "{:-<84}", "")?;

        for s in &self.summaries {
            writeln!(
                f,
                "{:<24} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                s.field, s.count, s.mean, s.std_dev, s.min, s.max
            )?;
        }

        Ok(())
    }
}
