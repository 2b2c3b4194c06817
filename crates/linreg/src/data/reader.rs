//! CSV reading.
//!
//! ## Purpose
//!
//! This module reads delimited files with a header row and projects a
//! chosen set of named columns into a [`Dataset`], parsing every cell as a
//! float.
//!
//! ## Design notes
//!
//! * **Projection by name**: Callers name the fields they want; everything
//!   else in the file (free-text columns included) is skipped unparsed.
//! * **Contextual failures**: A bad cell reports its field, line, and raw
//!   contents; the whole read fails rather than silently dropping rows.
//!
//! ## Non-goals
//!
//! * This module does not infer schemas or guess delimiters.
//! * This module does not handle missing-value imputation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::LinregError;

/// Read named numeric columns from a CSV file into a dataset.
///
/// The file must carry a header row; `fields` are matched against it
/// exactly. Column order in the resulting dataset follows `fields`, not
/// the file.
pub fn read_csv<T, P>(path: P, fields: &[&str]) -> Result<Dataset<T>, LinregError>
where
    T: Float + FromStr,
    P: AsRef<Path>,
{
    let file = File::open(path).map_err(|e| LinregError::Io(e.to_string()))?;
    from_csv_reader(BufReader::new(file), fields)
}

/// Read named numeric columns from any CSV source into a dataset.
pub fn from_csv_reader<T, R>(reader: R, fields: &[&str]) -> Result<Dataset<T>, LinregError>
where
    T: Float + FromStr,
    R: Read,
{
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LinregError::Csv(e.to_string()))?
        .clone();

    let indices = fields
        .iter()
        .map(|field| {
            headers
                .iter()
                .position(|h| h == *field)
                .ok_or_else(|| LinregError::UnknownField((*field).into()))
        })
        .collect::<Result<Vec<usize>, LinregError>>()?;

    let mut dataset = Dataset::new(fields.to_vec());

    for (row, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| LinregError::Csv(e.to_string()))?;

        // Header occupies line 1
        let line = row + 2;

        let mut values = Vec::with_capacity(indices.len());
        for (&idx, field) in indices.iter().zip(fields.iter()) {
            let cell = record.get(idx).unwrap_or("");
            let value = cell.trim().parse::<T>().map_err(|_| LinregError::Parse {
                field: (*field).into(),
                line,
                value: cell.into(),
            })?;
            values.push(value);
        }

        dataset.push_row(values)?;
    }

    Ok(dataset)
}
