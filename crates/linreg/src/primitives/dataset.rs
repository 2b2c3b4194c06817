//! Tabular dataset container with named numeric fields.
//!
//! ## Purpose
//!
//! This module provides the [`Dataset`] container — an ordered, finite
//! sequence of records that all share one field set — and the borrowed
//! [`Record`] view over a single row.
//!
//! ## Design notes
//!
//! * **Row-major**: Records are stored as rows; columns are projected on
//!   demand by field name.
//! * **Schema-checked**: Every insertion path validates row arity against
//!   the field set, so the invariant holds by construction.
//! * **Read-only sharing**: Records are immutable once inserted; splitting
//!   assigns them to subsets by copy.
//! * **Generics**: Values are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Every row has exactly one value per field.
//! * Field names are unique within a dataset.
//! * Record order is insertion order and is never reshuffled.
//!
//! ## Non-goals
//!
//! * This module does not parse files (see the `data` module).
//! * This module does not compute statistics over its contents.

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
use crate::primitives::errors::LinregError;

// ============================================================================
// Record View
// ============================================================================

/// Borrowed view of one observation's named numeric fields.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a, T> {
    fields: &'a [String],
    values: &'a [T],
}

impl<'a, T: Float> Record<'a, T> {
    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<T> {
        self.fields
            .iter()
            .position(|f| f == name)
            .map(|idx| self.values[idx])
    }

    /// The record's values, in field order.
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// The record's field names.
    pub fn fields(&self) -> &'a [String] {
        self.fields
    }
}

// ============================================================================
// Dataset Container
// ============================================================================

/// An ordered, finite sequence of records sharing one field set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    fields: Vec<String>,
    rows: Vec<Vec<T>>,
}

impl<T: Float> Dataset<T> {
    /// Create an empty dataset with the given field names.
    pub fn new<S: Into<String>>(fields: Vec<S>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create a dataset from complete rows.
    ///
    /// Each row must have exactly one value per field.
    pub fn from_rows<S: Into<String>>(
        fields: Vec<S>,
        rows: Vec<Vec<T>>,
    ) -> Result<Self, LinregError> {
        let mut dataset = Self::new(fields);
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// Create a dataset from named columns of equal length.
    pub fn from_columns<S: Into<String>>(
        columns: Vec<(S, Vec<T>)>,
    ) -> Result<Self, LinregError> {
        let mut fields = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        for (name, column) in columns {
            fields.push(name.into());
            values.push(column);
        }

        let expected = values.first().map_or(0, Vec::len);
        for (name, column) in fields.iter().zip(values.iter()) {
            if column.len() != expected {
                return Err(LinregError::MismatchedColumn {
                    field: name.clone(),
                    got: column.len(),
                    expected,
                });
            }
        }

        let rows = (0..expected)
            .map(|i| values.iter().map(|column| column[i]).collect())
            .collect();

        Ok(Self { fields, rows })
    }

    /// Append a record, validating its arity against the field set.
    pub fn push_row(&mut self, row: Vec<T>) -> Result<(), LinregError> {
        if row.len() != self.fields.len() {
            return Err(LinregError::MalformedRow {
                row: self.rows.len(),
                got: row.len(),
                expected: self.fields.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a record known to conform to the schema.
    pub(crate) fn push_row_raw(&mut self, row: Vec<T>) {
        debug_assert_eq!(row.len(), self.fields.len());
        self.rows.push(row);
    }

    /// An empty dataset with the same field set.
    pub(crate) fn like(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            rows: Vec::new(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The dataset's field names, in column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Position of a field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Borrow one record by index.
    pub fn record(&self, index: usize) -> Option<Record<'_, T>> {
        self.rows.get(index).map(|row| Record {
            fields: &self.fields,
            values: row,
        })
    }

    /// Iterate over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = Record<'_, T>> {
        self.rows.iter().map(move |row| Record {
            fields: &self.fields,
            values: row,
        })
    }

    /// Project a column by field name into an owned sequence.
    pub fn column(&self, name: &str) -> Result<Vec<T>, LinregError> {
        let idx = self
            .field_index(name)
            .ok_or_else(|| LinregError::UnknownField(name.into()))?;
        Ok(self.rows.iter().map(|row| row[idx]).collect())
    }
}
