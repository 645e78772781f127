//! # Expression errors

use thiserror::Error;

/// Result type for expression parsing
pub type ExprResult<T> = Result<T, ExprError>;

/// Expression parsing errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExprError {
    #[error("No comparison operator found in expression: {0}")]
    NoOperator(String),

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Sort direction must be 'asc' or 'desc', got: {0}")]
    InvalidSortDirection(String),

    #[error("Unknown aggregator kind: {0}")]
    UnknownAggregator(String),
}
