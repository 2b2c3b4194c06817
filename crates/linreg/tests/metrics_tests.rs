//! Tests for prediction accuracy metrics.
//!
//! These tests verify the evaluator's definitions and edge cases:
//! - MAE, MSE, and RMSE against hand-computed values
//! - R² anchor points (perfect fit, mean predictor)
//! - Shape and degeneracy errors
//!
//! ## Test Organization
//!
//! 1. **Hand-Computed Values** - Direct verification of each metric
//! 2. **R² Anchor Points** - The 1.0 / 0.0 / sentinel cases
//! 3. **Error Conditions** - Mismatched and empty inputs

use approx::assert_relative_eq;
use linreg::prelude::*;

// ============================================================================
// Hand-Computed Value Tests
// ============================================================================

/// Test all four metrics against a worked example.
///
/// Residuals are (1, -1, 1): MAE = 1, MSE = 1, RMSE = 1,
/// SS_res = 3 and SS_tot = 8 give R² = 0.625.
#[test]
fn test_metrics_hand_computed() {
    let actual = vec![2.0f64, 4.0, 6.0];
    let predicted = vec![3.0f64, 3.0, 7.0];

    let metrics = evaluate(&actual, &predicted).unwrap();

    assert_relative_eq!(metrics.mae, 1.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.mse, 1.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.rmse, 1.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.r2, 0.625, epsilon = 1e-12);
}

/// Test that RMSE is the square root of MSE.
#[test]
fn test_metrics_rmse_is_sqrt_mse() {
    let actual = vec![1.0f64, 2.0, 3.0, 4.0];
    let predicted = vec![1.5f64, 2.5, 2.5, 4.5];

    let metrics = evaluate(&actual, &predicted).unwrap();

    assert_relative_eq!(metrics.rmse, metrics.mse.sqrt(), epsilon = 1e-12);
}

// ============================================================================
// R² Anchor Point Tests
// ============================================================================

/// Test that a perfect prediction scores R² = 1 with zero error.
#[test]
fn test_metrics_perfect_prediction() {
    let actual = vec![1.0f64, 2.0, 3.0, 4.0];
    let predicted = actual.clone();

    let metrics = evaluate(&actual, &predicted).unwrap();

    assert_relative_eq!(metrics.mae, 0.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.mse, 0.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.r2, 1.0, epsilon = 1e-12);
}

/// Test that always predicting the mean scores R² = 0.
#[test]
fn test_metrics_mean_prediction_scores_zero() {
    let actual = vec![1.0f64, 2.0, 3.0];
    let predicted = vec![2.0f64; 3];

    let metrics = evaluate(&actual, &predicted).unwrap();

    assert_relative_eq!(metrics.r2, 0.0, epsilon = 1e-12);
}

/// Test that a prediction worse than the mean scores negative R².
#[test]
fn test_metrics_worse_than_mean_is_negative() {
    let actual = vec![1.0f64, 2.0, 3.0];
    let predicted = vec![3.0f64, 2.0, 1.0];

    let metrics = evaluate(&actual, &predicted).unwrap();

    assert!(metrics.r2 < 0.0, "anti-correlated predictions: R² < 0");
}

/// Test the zero-variance sentinel.
///
/// With identical actuals SS_tot is zero, so R² is undefined and reported
/// as NaN; the error metrics stay well-defined.
#[test]
fn test_metrics_zero_actual_variance_sentinel() {
    let actual = vec![5.0f64, 5.0, 5.0];
    let predicted = vec![5.0f64, 5.0, 6.0];

    let metrics = evaluate(&actual, &predicted).unwrap();

    assert!(metrics.r2.is_nan());
    assert_relative_eq!(metrics.mae, 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.mse, 1.0 / 3.0, epsilon = 1e-12);
}

// ============================================================================
// Error Condition Tests
// ============================================================================

/// Test that mismatched sequence lengths are rejected.
#[test]
fn test_metrics_mismatched_lengths_fail() {
    let actual = vec![1.0f64, 2.0, 3.0];
    let predicted = vec![1.0f64, 2.0];

    assert_eq!(
        evaluate(&actual, &predicted),
        Err(LinregError::MismatchedLengths { left: 3, right: 2 })
    );
}

/// Test that empty sequences are rejected.
#[test]
fn test_metrics_empty_inputs_fail() {
    let empty: Vec<f64> = Vec::new();

    assert_eq!(evaluate(&empty, &empty), Err(LinregError::EmptyInput));
}

/// Test the Display rendering of a metrics report.
#[test]
fn test_metrics_display() {
    let actual = vec![1.0f64, 2.0, 3.0];
    let predicted = vec![1.0f64, 2.0, 3.0];

    let rendered = format!("{}", evaluate(&actual, &predicted).unwrap());

    assert!(rendered.contains("MAE"));
    assert!(rendered.contains("R²"));
}
