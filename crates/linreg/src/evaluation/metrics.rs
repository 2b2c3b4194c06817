//! Accuracy metrics for predictions.
//!
//! ## Purpose
//!
//! This module scores a prediction vector against held-out true values,
//! reporting mean absolute error, mean squared error, root mean squared
//! error, and the coefficient of determination (R²).
//!
//! ## Design notes
//!
//! * **Conventional argument order**: `compute(actual, predicted)` — the
//!   total sum of squares is centered on `mean(actual)`. Workflows that
//!   passed the arguments reversed (centering on the prediction mean) get a
//!   different R²; that ordering is deliberately not reproduced.
//! * **Sentinel, not division by zero**: When the actuals have zero
//!   variance, R² is reported as NaN — the quantity is undefined there,
//!   and the condition is a well-defined mathematical edge case rather
//!   than an input contract violation.
//!
//! ## Key concepts
//!
//! * **MAE**: mean of |prediction − actual|.
//! * **MSE / RMSE**: mean of squared residuals and its square root.
//! * **R²**: 1 − SS_res/SS_tot; 1.0 is a perfect fit, 0.0 matches always
//!   predicting the mean, negative is worse than the mean.
//!
//! ## Invariants
//!
//! * MAE, MSE, and RMSE are non-negative for finite inputs.
//! * R² <= 1 whenever it is defined.
//!
//! ## Non-goals
//!
//! * This module does not fit or predict.
//! * This module does not provide p-values or hypothesis tests.

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::math::stats;
use crate::primitives::errors::LinregError;

// ============================================================================
// Metrics Report
// ============================================================================

/// Accuracy metrics comparing predictions against true values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics<T> {
    /// Mean Absolute Error.
    pub mae: T,

    /// Mean Squared Error.
    pub mse: T,

    /// Root Mean Squared Error.
    pub rmse: T,

    /// Coefficient of determination (R²); NaN when the actuals have zero
    /// variance.
    pub r2: T,
}

impl<T: Float> Metrics<T> {
    /// Score predictions against true values.
    ///
    /// Arguments follow the conventional `(actual, predicted)` order; both
    /// sequences must be equal-length and non-empty.
    ///
    /// # Errors
    ///
    /// * [`LinregError::MismatchedLengths`] if the lengths disagree.
    /// * [`LinregError::EmptyInput`] if the sequences are empty.
    pub fn compute(actual: &[T], predicted: &[T]) -> Result<Self, LinregError> {
        if actual.len() != predicted.len() {
            return Err(LinregError::MismatchedLengths {
                left: actual.len(),
                right: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(LinregError::EmptyInput);
        }

        let n_t = T::from(actual.len()).unwrap_or(T::one());
        let actual_mean = stats::mean(actual);

        // Residual, absolute-residual, and total sums in one pass
        let (sum_abs, ss_res, ss_tot) = actual.iter().zip(predicted.iter()).fold(
            (T::zero(), T::zero(), T::zero()),
            |(abs, res, tot), (&a, &p)| {
                let residual = p - a;
                let deviation = a - actual_mean;
                (
                    abs + residual.abs(),
                    res + residual * residual,
                    tot + deviation * deviation,
                )
            },
        );

        let mae = sum_abs / n_t;
        let mse = ss_res / n_t;
        let rmse = mse.sqrt();

        let r2 = if ss_tot == T::zero() {
            T::nan()
        } else {
            T::one() - ss_res / ss_tot
        };

        Ok(Metrics { mae, mse, rmse, r2 })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Metrics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation Metrics:")?;
        writeln!(f, "  MAE:   {:.6}", self.mae)?;
        writeln!(f, "  MSE:   {:.6}", self.mse)?;
        writeln!(f, "  RMSE:  {:.6}", self.rmse)?;
        writeln!(f, "  R²:    {:.6}", self.r2)?;
        Ok(())
    }
}
