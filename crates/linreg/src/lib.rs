//! # linreg — Simple Linear Regression for Rust
//!
//! A small, layered library for **single-variable least-squares regression**
//! over tabular datasets with named numeric fields: load a dataset, split it
//! into train/test subsets with an explicit seed, fit a line by ordinary
//! least squares, and score the fit on the held-out records.
//!
//! ## The pipeline
//!
//! ```text
//! dataset → split → fit → predict → evaluate
//! ```
//!
//! Every stage is a pure, stateless computation: the same inputs and the
//! same seed always produce the same partition, the same line, and the same
//! metrics. Nothing is global, nothing is ambient.
//!
//! ## Quick Start
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let dataset = Dataset::from_columns(vec![
//!     ("ENGINESIZE", vec![2.0, 2.0, 4.0, 4.0]),
//!     ("CO2EMISSIONS", vec![200.0, 200.0, 400.0, 400.0]),
//! ])?;
//!
//! let report = Linreg::new()
//!     .predictor("ENGINESIZE")
//!     .target("CO2EMISSIONS")
//!     .train_fraction(0.8)
//!     .seed(11)
//!     .build()?
//!     .run(&dataset)?;
//!
//! println!("{}", report);
//! # Result::<(), LinregError>::Ok(())
//! ```
//!
//! ## Function surface
//!
//! The builder wraps four free functions that can also be called directly:
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let dataset: Dataset<f64> = Dataset::from_columns(vec![
//!     ("ENGINESIZE", vec![2.0, 2.0, 4.0, 4.0]),
//!     ("CO2EMISSIONS", vec![200.0, 200.0, 400.0, 400.0]),
//! ])?;
//!
//! // All four records go to train at fraction 1.0.
//! let (train, _test) = split(&dataset, 1.0, 42)?;
//!
//! let model = fit(&train, "ENGINESIZE", "CO2EMISSIONS")?;
//! assert!((model.slope - 100.0).abs() < 1e-9);
//!
//! let predicted = predict(&model, &[3.0]);
//! assert!((predicted[0] - 300.0).abs() < 1e-9);
//! # Result::<(), LinregError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, LinregError>`. Degenerate inputs
//! (a constant predictor, an empty train or test subset, mismatched
//! sequence lengths) surface as typed errors immediately; nothing is
//! retried and nothing panics.
//!
//! ## Minimal Usage (no_std)
//!
//! With `default-features = false` the core pipeline runs on `alloc` alone;
//! only the CSV accessor under `linreg::prelude::read_csv` needs `std`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and the dataset container.
mod primitives;

// Layer 2: Math - single-pass moment accumulation.
mod math;

// Layer 3: Algorithms - the closed-form least-squares fit.
mod algorithms;

// Layer 4: Evaluation - holdout splitting and accuracy metrics.
mod evaluation;

// Layer 5: Engine - validation and pipeline orchestration.
mod engine;

// Dataset accessor for delimited files (std only).
#[cfg(feature = "std")]
mod data;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        evaluate, fit, predict, split, Dataset, LinearModel, LinregBuilder as Linreg, LinregError,
        Metrics, Record, Regression, RegressionConfig, RegressionReport,
    };

    #[cfg(feature = "std")]
    pub use crate::data::{from_csv_reader, read_csv, FieldSummary, Summary};
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    #[cfg(feature = "std")]
    pub mod data {
        pub use crate::data::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
