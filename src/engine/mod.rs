//! Row-processing engine
//!
//! Consumes a dataset and the parsed expressions, producing deterministic
//! results.
//!
//! # Execution Flow (fixed order)
//!
//! 1. Filter rows by predicate (stable, order-preserving)
//! 2. Sort rows by coerced key (stable)
//! 3. Reduce one column to a statistic
//!
//! Every component is stateless; each stage takes the previous stage's
//! output by value and nothing is mutated in place.

mod aggregate;
mod errors;
mod filter;
mod pipeline;
mod sorter;

pub use aggregate::Aggregator;
pub use errors::{EngineError, EngineResult};
pub use filter::RowFilter;
pub use pipeline::{Pipeline, PipelineSpec, QueryOutput};
pub use sorter::RowSorter;
