//! Row container shared by the reader and the processing engine
//!
//! A dataset is an ordered sequence of rows with a uniform column set.
//! Rows hold raw cell text, positionally aligned with the column list;
//! typing happens later, one cell at a time, in the engine.

use serde::Serialize;

/// A single row of raw cell text, aligned with `Dataset::columns`.
pub type Row = Vec<String>;

/// An ordered collection of uniform-column rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// Column names, in file order
    pub columns: Vec<String>,
    /// Rows, in file order
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Creates a dataset from a column list and matching rows
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Creates a dataset with no columns and no rows
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Returns a dataset with the same columns but different rows
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Returns the position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Looks up one cell of a row by column name
    pub fn cell<'a>(&self, row: &'a Row, name: &str) -> Option<&'a str> {
        self.column_index(name)
            .and_then(|i| row.get(i))
            .map(String::as_str)
    }

    /// Returns true if the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
