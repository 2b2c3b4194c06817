//! Dataset accessor for delimited files (std only).
//!
//! # Purpose
//!
//! This module turns a delimited tabular file into a [`Dataset`] by
//! projecting named numeric columns, and provides per-field descriptive
//! summaries for quick exploration before fitting.
//!
//! Malformed files surface as typed errors with field and line context;
//! rows the projection does not touch (free-text columns such as make or
//! model names) are ignored entirely.
//!
//! [`Dataset`]: crate::prelude::Dataset

/// CSV reading.
mod reader;

/// Per-field descriptive summaries.
mod summary;

pub use reader::{from_csv_reader, read_csv};
pub use summary::{FieldSummary, Summary};
