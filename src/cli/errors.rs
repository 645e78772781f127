//! # CLI errors

use thiserror::Error;

use crate::engine::EngineError;
use crate::reader::ReaderError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Top-level CLI error, wrapping every lower layer
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Read(#[from] ReaderError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Delimiter must be a single-byte character: {0}")]
    InvalidDelimiter(char),
}
