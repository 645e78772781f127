//! # Engine errors

use thiserror::Error;

use crate::expr::ExprError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Row-processing errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Aggregation is not supported for string values in column: {0}")]
    StringAggregation(String),

    #[error(transparent)]
    Expr(#[from] ExprError),
}
