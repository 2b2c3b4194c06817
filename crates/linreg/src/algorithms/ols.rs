//! Ordinary least-squares fitting and prediction.
//!
//! ## Purpose
//!
//! This module computes the line `y = slope·x + intercept` minimizing the
//! sum of squared residuals over a training sample, and applies a fitted
//! line to new predictor values.
//!
//! ## Design notes
//!
//! * **Closed form**: `slope = covariance(x, y) / variance(x)` and
//!   `intercept = mean(y) − slope·mean(x)`; no iteration.
//! * **Single pass**: Moments come from one accumulation pass (SIMD for
//!   `f32`/`f64`), O(n) time and O(1) extra memory.
//! * **Fail, don't fudge**: A predictor with zero variance has no defined
//!   slope and is reported as a typed error, never silently flattened.
//!
//! ## Key concepts
//!
//! * **Fitted model**: An immutable `(slope, intercept)` pair, plus the
//!   training means it was derived from.
//! * **Prediction**: A pure element-wise map; order and length preserved.
//!
//! ## Invariants
//!
//! * A fitted line always passes through `(x_mean, y_mean)`.
//! * `predict` is total for finite inputs; non-finite inputs propagate.
//!
//! ## Non-goals
//!
//! * This module does not split data or compute accuracy metrics.
//! * This module does not support more than one predictor variable.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::MomentAccumulator;
use crate::primitives::errors::LinregError;

// ============================================================================
// Linear Model
// ============================================================================

/// A fitted least-squares line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel<T> {
    /// Slope (coefficient of the predictor).
    pub slope: T,

    /// Intercept (predicted value at x = 0).
    pub intercept: T,

    /// Mean of the training predictor values.
    pub x_mean: T,

    /// Mean of the training target values.
    pub y_mean: T,
}

impl<T: Float + MomentAccumulator> LinearModel<T> {
    /// Predictor variance below this is treated as constant.
    const VARIANCE_TOL: f64 = 1e-12;

    /// Fit the least-squares line through paired training samples.
    ///
    /// # Errors
    ///
    /// * [`LinregError::EmptyInput`] if either sequence is empty.
    /// * [`LinregError::MismatchedLengths`] if the sequences disagree in length.
    /// * [`LinregError::ConstantPredictor`] if all x-values are identical.
    pub fn fit(x: &[T], y: &[T]) -> Result<Self, LinregError> {
        if x.is_empty() || y.is_empty() {
            return Err(LinregError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(LinregError::MismatchedLengths {
                left: x.len(),
                right: y.len(),
            });
        }

        let moments = T::accumulate(x, y);
        let variance = moments.variance_x();

        let tol = T::from(Self::VARIANCE_TOL).unwrap_or(T::zero());
        if variance <= tol {
            return Err(LinregError::ConstantPredictor(
                x[0].to_f64().unwrap_or(f64::NAN),
            ));
        }

        let x_mean = moments.mean_x();
        let y_mean = moments.mean_y();
        let slope = moments.covariance() / variance;
        let intercept = y_mean - slope * x_mean;

        Ok(Self {
            slope,
            intercept,
            x_mean,
            y_mean,
        })
    }
}

impl<T: Float> LinearModel<T> {
    /// Predict the target for a single predictor value.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Predict targets for a sequence of predictor values.
    ///
    /// Order and length are preserved: `output[i]` is the prediction for
    /// `values[i]`.
    pub fn predict_many(&self, values: &[T]) -> Vec<T> {
        values.iter().map(|&v| self.predict(v)).collect()
    }
}
