//! Expression mini-language
//!
//! Scalar coercion of raw cell text plus the parsers for the three
//! expression forms taken on the command line: filter predicates, sort
//! specifications, and aggregate specifications.

mod errors;
mod parser;
mod scalar;

pub use errors::{ExprError, ExprResult};
pub use parser::{
    split_expression, AggregateKind, AggregateSpec, CompareOp, FilterExpr, SortDirection, SortSpec,
};
pub use scalar::Scalar;
