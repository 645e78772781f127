//! # Reader errors

use std::io;

use thiserror::Error;

/// Result type for reader operations
pub type ReaderResult<T> = Result<T, ReaderError>;

/// CSV input errors
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: csv::Error,
    },
}
