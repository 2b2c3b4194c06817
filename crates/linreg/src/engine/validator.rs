//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for pipeline parameters and
//! input data: field names, fraction bounds, sequence shapes, finiteness,
//! and subset sizes.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the split, fit, or evaluation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::LinregError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
///
/// Provides static methods returning `Result<(), LinregError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired training sequences for a least-squares fit.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), LinregError> {
        // Check 1: Non-empty sequences
        if x.is_empty() || y.is_empty() {
            return Err(LinregError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(LinregError::MismatchedLengths {
                left: n,
                right: y.len(),
            });
        }

        // Check 3: Sufficient records for a line
        if n < 2 {
            return Err(LinregError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(LinregError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(LinregError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the train inclusion fraction.
    pub fn validate_fraction<T: Float>(fraction: T) -> Result<(), LinregError> {
        if !fraction.is_finite() || fraction <= T::zero() || fraction > T::one() {
            return Err(LinregError::InvalidFraction(
                fraction.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that a dataset holds at least one record.
    pub fn validate_dataset<T: Float>(dataset: &Dataset<T>) -> Result<(), LinregError> {
        if dataset.is_empty() {
            return Err(LinregError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that a named field exists in the dataset.
    pub fn validate_field<T: Float>(
        dataset: &Dataset<T>,
        name: &str,
    ) -> Result<(), LinregError> {
        if dataset.field_index(name).is_none() {
            return Err(LinregError::UnknownField(name.into()));
        }
        Ok(())
    }

    // ========================================================================
    // Pipeline Validation
    // ========================================================================

    /// Validate that a split subset is non-empty.
    pub fn validate_subset(side: &'static str, len: usize) -> Result<(), LinregError> {
        if len == 0 {
            return Err(LinregError::EmptySubset { side });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), LinregError> {
        if let Some(parameter) = duplicate_param {
            return Err(LinregError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
