//! Error types for regression operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur across the
//! pipeline: dataset construction, splitting, fitting, evaluation, and the
//! CSV accessor.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the relevant values (field names, lengths,
//!   row numbers) so a failure can be diagnosed without a debugger.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Degenerate inputs**: Empty data, constant predictors, empty subsets.
//! 2. **Shape mismatches**: Sequences or rows whose lengths disagree.
//! 3. **Contract violations**: Unknown fields, out-of-range fractions,
//!    missing or duplicated builder parameters.
//! 4. **Accessor failures**: I/O, CSV, and cell-parse errors (std only in
//!    practice, though the variants themselves are always available).
//!
//! ## Invariants
//!
//! * Every variant provides sufficient context for diagnosis.
//! * Retrying a failed operation with unchanged input cannot succeed, so no
//!   variant is transient.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for regression operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LinregError {
    /// Input sequences or datasets are empty.
    EmptyInput,

    /// Number of records is below the minimum required for a fit.
    TooFewPoints {
        /// Number of records provided.
        got: usize,
        /// Minimum required records.
        min: usize,
    },

    /// Two sequences required to be equal length are not.
    MismatchedLengths {
        /// Number of elements in the first sequence.
        left: usize,
        /// Number of elements in the second sequence.
        right: usize,
    },

    /// All predictor values are identical; the slope is undefined.
    ConstantPredictor(f64),

    /// A train/test subset came out empty, so downstream stages cannot run.
    EmptySubset {
        /// Which side of the split is empty ("train" or "test").
        side: &'static str,
    },

    /// A row's arity does not match the dataset's field set.
    MalformedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of values in the row.
        got: usize,
        /// Number of fields in the dataset.
        expected: usize,
    },

    /// A column's length does not match the others during construction.
    MismatchedColumn {
        /// Name of the offending column.
        field: String,
        /// Number of values in the column.
        got: usize,
        /// Expected number of values.
        expected: usize,
    },

    /// Train fraction must be in the range (0, 1].
    InvalidFraction(f64),

    /// A named field does not exist in the dataset.
    UnknownField(String),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A builder parameter was set multiple times.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// An I/O failure while reading a dataset.
    Io(String),

    /// A malformed delimited file.
    Csv(String),

    /// A cell that could not be parsed as a number.
    Parse {
        /// Field the cell belongs to.
        field: String,
        /// One-based line number in the source file.
        line: usize,
        /// The raw cell contents.
        value: String,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LinregError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few records: got {got}, need at least {min}")
            }
            Self::MismatchedLengths { left, right } => {
                write!(f, "Length mismatch: sequences have {left} and {right} elements")
            }
            Self::ConstantPredictor(value) => {
                write!(
                    f,
                    "Constant predictor: all values equal {value}, slope is undefined"
                )
            }
            Self::EmptySubset { side } => {
                write!(f, "The {side} subset is empty; adjust the train fraction or seed")
            }
            Self::MalformedRow { row, got, expected } => {
                write!(f, "Row {row} has {got} values, expected {expected}")
            }
            Self::MismatchedColumn {
                field,
                got,
                expected,
            } => {
                write!(f, "Column '{field}' has {got} values, expected {expected}")
            }
            Self::InvalidFraction(fraction) => {
                write!(f, "Invalid train fraction: {fraction} (must be > 0 and <= 1)")
            }
            Self::UnknownField(name) => write!(f, "Unknown field: '{name}'"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::MissingParameter { parameter } => {
                write!(f, "Required parameter '{parameter}' was never set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::Parse { field, line, value } => {
                write!(f, "Cannot parse '{value}' as a number (field '{field}', line {line})")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LinregError {}
