//! CSV input
//!
//! Reads a CSV file into a `Dataset`: the header row becomes the column
//! list, each record becomes one row of raw cell text. Records with a
//! mismatched field count are a read error, which keeps the uniform
//! column invariant on everything downstream.

mod errors;

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::dataset::Dataset;

pub use errors::{ReaderError, ReaderResult};

/// Reads CSV files into datasets
pub struct CsvReader;

impl CsvReader {
    /// Reads a comma-delimited file
    pub fn read(path: &Path) -> ReaderResult<Dataset> {
        Self::read_with_delimiter(path, b',')
    }

    /// Reads a file with an explicit field delimiter
    pub fn read_with_delimiter(path: &Path, delimiter: u8) -> ReaderResult<Dataset> {
        let display = path.display().to_string();

        let file = File::open(path).map_err(|e| ReaderError::Open {
            path: display.clone(),
            source: e,
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .from_reader(file);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| ReaderError::Malformed {
                path: display.clone(),
                source: e,
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ReaderError::Malformed {
                path: display.clone(),
                source: e,
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Dataset::new(columns, rows))
    }
}
