//! Tests for the high-level API.
//!
//! These tests exercise the fluent builder and the free-function surface
//! end to end, using only prelude imports.
//!
//! ## Test Organization
//!
//! 1. **Builder Validation** - Defaults, required and duplicated parameters
//! 2. **Pipeline Runs** - Complete split/fit/predict/evaluate workflows
//! 3. **Degenerate Pipelines** - Empty subsets and unknown fields
//! 4. **Function Surface** - The free functions composed by hand

use approx::assert_relative_eq;
use linreg::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// The engine-size/CO2 toy dataset: perfectly linear at 100 g/km per litre.
fn co2_dataset() -> Dataset<f64> {
    Dataset::from_columns(vec![
        ("ENGINESIZE", vec![2.0, 2.0, 4.0, 4.0]),
        ("CO2EMISSIONS", vec![200.0, 200.0, 400.0, 400.0]),
    ])
    .unwrap()
}

/// Twenty records on the exact line y = 100x.
fn linear_dataset() -> Dataset<f64> {
    let x: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&v| 100.0 * v).collect();
    Dataset::from_columns(vec![("ENGINESIZE", x), ("CO2EMISSIONS", y)]).unwrap()
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test that unset optional parameters fall back to documented defaults.
#[test]
fn test_builder_defaults() {
    let regression = Linreg::<f64>::new()
        .predictor("ENGINESIZE")
        .target("CO2EMISSIONS")
        .build()
        .unwrap();

    assert_relative_eq!(regression.config().train_fraction, 0.8, epsilon = 1e-12);
    assert_eq!(regression.config().seed, 0);
}

/// Test that a missing predictor is rejected.
#[test]
fn test_builder_missing_predictor() {
    let result = Linreg::<f64>::new().target("CO2EMISSIONS").build();

    assert!(matches!(
        result,
        Err(LinregError::MissingParameter {
            parameter: "predictor"
        })
    ));
}

/// Test that a missing target is rejected.
#[test]
fn test_builder_missing_target() {
    let result = Linreg::<f64>::new().predictor("ENGINESIZE").build();

    assert!(matches!(
        result,
        Err(LinregError::MissingParameter { parameter: "target" })
    ));
}

/// Test that setting a parameter twice is rejected at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let result = Linreg::<f64>::new()
        .predictor("ENGINESIZE")
        .target("CO2EMISSIONS")
        .target("CYLINDERS")
        .build();

    assert!(matches!(
        result,
        Err(LinregError::DuplicateParameter { parameter: "target" })
    ));
}

/// Test that out-of-range fractions are rejected at build time.
#[test]
fn test_builder_invalid_fraction() {
    for bad in [0.0, -1.0, 1.01] {
        let result = Linreg::<f64>::new()
            .predictor("ENGINESIZE")
            .target("CO2EMISSIONS")
            .train_fraction(bad)
            .build();

        assert!(
            matches!(result, Err(LinregError::InvalidFraction(_))),
            "fraction {} should be rejected",
            bad
        );
    }
}

// ============================================================================
// Pipeline Run Tests
// ============================================================================

/// Test a complete run over exactly linear data.
///
/// Seed 2 at fraction 0.8 holds out four of the twenty records; the fit
/// recovers the generating line, so the held-out metrics are exact.
#[test]
fn test_pipeline_exact_linear_run() {
    let report = Linreg::new()
        .predictor("ENGINESIZE")
        .target("CO2EMISSIONS")
        .train_fraction(0.8)
        .seed(2)
        .build()
        .unwrap()
        .run(&linear_dataset())
        .unwrap();

    assert_eq!(report.train_size + report.test_size, 20);
    assert!(report.test_size > 0);
    assert_eq!(report.predictions.len(), report.test_size);

    assert_relative_eq!(report.model.slope, 100.0, epsilon = 1e-9);
    assert_relative_eq!(report.model.intercept, 0.0, epsilon = 1e-9);
    assert_relative_eq!(report.metrics.mae, 0.0, epsilon = 1e-9);
    assert_relative_eq!(report.metrics.r2, 1.0, epsilon = 1e-9);
}

/// Test that a run is reproducible from its configuration.
#[test]
fn test_pipeline_run_is_deterministic() {
    let dataset = linear_dataset();
    let build = || {
        Linreg::new()
            .predictor("ENGINESIZE")
            .target("CO2EMISSIONS")
            .train_fraction(0.8)
            .seed(123)
            .build()
            .unwrap()
    };

    let first = build().run(&dataset).unwrap();
    let second = build().run(&dataset).unwrap();

    assert_eq!(first, second);
}

/// Test the report's Display rendering.
#[test]
fn test_pipeline_report_display() {
    let report = Linreg::new()
        .predictor("ENGINESIZE")
        .target("CO2EMISSIONS")
        .seed(2)
        .build()
        .unwrap()
        .run(&linear_dataset())
        .unwrap();

    let rendered = format!("{}", report);

    assert!(rendered.contains("Slope"));
    assert!(rendered.contains("ENGINESIZE"));
    assert!(rendered.contains("Evaluation Metrics"));
}

// ============================================================================
// Degenerate Pipeline Tests
// ============================================================================

/// Test that an unknown predictor field fails before any computation.
#[test]
fn test_pipeline_unknown_field() {
    let result = Linreg::new()
        .predictor("HORSEPOWER")
        .target("CO2EMISSIONS")
        .build()
        .unwrap()
        .run(&co2_dataset());

    assert_eq!(result, Err(LinregError::UnknownField("HORSEPOWER".into())));
}

/// Test that an empty training subset surfaces as a degenerate-input error.
///
/// At fraction 0.0001 with seed 1 every draw lands in test.
#[test]
fn test_pipeline_empty_train_subset() {
    let result = Linreg::new()
        .predictor("ENGINESIZE")
        .target("CO2EMISSIONS")
        .train_fraction(0.0001)
        .seed(1)
        .build()
        .unwrap()
        .run(&co2_dataset());

    assert_eq!(result, Err(LinregError::EmptySubset { side: "train" }));
}

/// Test that an empty test subset surfaces as a degenerate-input error.
#[test]
fn test_pipeline_empty_test_subset() {
    let single = Dataset::from_columns(vec![
        ("ENGINESIZE", vec![2.0]),
        ("CO2EMISSIONS", vec![200.0]),
    ])
    .unwrap();

    // Seed 2's first draw goes to train, leaving test empty.
    let result = Linreg::new()
        .predictor("ENGINESIZE")
        .target("CO2EMISSIONS")
        .train_fraction(0.8)
        .seed(2)
        .build()
        .unwrap()
        .run(&single);

    assert_eq!(result, Err(LinregError::EmptySubset { side: "test" }));
}

/// Test that a constant predictor in the training subset fails the fit.
#[test]
fn test_pipeline_constant_predictor() {
    let flat = Dataset::from_columns(vec![
        ("ENGINESIZE", vec![2.0; 10]),
        ("CO2EMISSIONS", (0..10).map(|i| i as f64).collect()),
    ])
    .unwrap();

    let result = Linreg::new()
        .predictor("ENGINESIZE")
        .target("CO2EMISSIONS")
        .train_fraction(0.8)
        .seed(2)
        .build()
        .unwrap()
        .run(&flat);

    assert!(matches!(result, Err(LinregError::ConstantPredictor(_))));
}

// ============================================================================
// Function Surface Tests
// ============================================================================

/// Test the whole workflow composed from the free functions.
///
/// Fraction 1.0 deterministically keeps all four records for training:
/// the fit is y = 100x exactly, and 3.0 litres predicts 300 g/km.
#[test]
fn test_function_surface_end_to_end() {
    let dataset = co2_dataset();

    let (train, test) = split(&dataset, 1.0, 42).unwrap();
    assert_eq!(train.len(), 4);
    assert!(test.is_empty());

    let model = fit(&train, "ENGINESIZE", "CO2EMISSIONS").unwrap();
    assert_relative_eq!(model.slope, 100.0, epsilon = 1e-12);
    assert_relative_eq!(model.intercept, 0.0, epsilon = 1e-12);

    let predicted = predict(&model, &[3.0]);
    assert_relative_eq!(predicted[0], 300.0, epsilon = 1e-12);
}

/// Test that fit and evaluate agree with the builder pipeline.
#[test]
fn test_function_surface_matches_pipeline() {
    let dataset = linear_dataset();

    let (train, test) = split(&dataset, 0.8, 2).unwrap();
    let model = fit(&train, "ENGINESIZE", "CO2EMISSIONS").unwrap();
    let predicted = predict(&model, &test.column("ENGINESIZE").unwrap());
    let metrics = evaluate(&test.column("CO2EMISSIONS").unwrap(), &predicted).unwrap();

    let report = Linreg::new()
        .predictor("ENGINESIZE")
        .target("CO2EMISSIONS")
        .train_fraction(0.8)
        .seed(2)
        .build()
        .unwrap()
        .run(&dataset)
        .unwrap();

    assert_eq!(report.train_size, train.len());
    assert_eq!(report.test_size, test.len());
    assert_eq!(report.predictions, predicted);
    assert_eq!(report.metrics, metrics);
}

/// Test that fitting on too few records is rejected.
#[test]
fn test_fit_requires_two_records() {
    let tiny = Dataset::from_columns(vec![
        ("ENGINESIZE", vec![2.0]),
        ("CO2EMISSIONS", vec![200.0]),
    ])
    .unwrap();

    assert_eq!(
        fit(&tiny, "ENGINESIZE", "CO2EMISSIONS"),
        Err(LinregError::TooFewPoints { got: 1, min: 2 })
    );
}

/// Test that non-finite training values are rejected.
#[test]
fn test_fit_rejects_non_finite_values() {
    let poisoned = Dataset::from_columns(vec![
        ("ENGINESIZE", vec![1.0, 2.0, f64::NAN]),
        ("CO2EMISSIONS", vec![100.0, 200.0, 300.0]),
    ])
    .unwrap();

    let result = fit(&poisoned, "ENGINESIZE", "CO2EMISSIONS");

    assert!(matches!(result, Err(LinregError::InvalidNumericValue(_))));
}
