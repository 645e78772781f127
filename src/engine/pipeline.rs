//! Pipeline orchestration
//!
//! Threads a dataset through the three optional stages in fixed order:
//! 1. Filter rows by predicate
//! 2. Sort rows by coerced key
//! 3. Reduce one column to a statistic
//!
//! A stage runs only when its expression text was supplied; with no
//! stages requested the input passes through unchanged. An aggregate
//! stage changes the output shape from tabular to a single statistic.

use crate::dataset::Dataset;
use crate::expr::{AggregateKind, AggregateSpec, FilterExpr, Scalar, SortSpec};

use super::aggregate::Aggregator;
use super::errors::EngineResult;
use super::filter::RowFilter;
use super::sorter::RowSorter;

/// Raw expression texts for the three optional stages
#[derive(Debug, Clone, Default)]
pub struct PipelineSpec {
    /// Filter expression, e.g. `price>500`
    pub filter: Option<String>,
    /// Sort expression, e.g. `price=asc`
    pub order_by: Option<String>,
    /// Aggregate expression, e.g. `price=avg`
    pub aggregate: Option<String>,
}

/// Final output shape: still tabular, or reduced to one statistic
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    /// Row output, possibly filtered and reordered
    Rows(Dataset),
    /// Aggregate output: the statistic kind and its computed value
    Aggregate { kind: AggregateKind, value: Scalar },
}

/// Runs the stages of one invocation in fixed order
pub struct Pipeline;

impl Pipeline {
    /// Applies filter, then sort, then aggregate, skipping absent stages
    pub fn run(dataset: Dataset, spec: &PipelineSpec) -> EngineResult<QueryOutput> {
        let mut data = dataset;

        if let Some(text) = stage(&spec.filter) {
            let expr = FilterExpr::parse(text)?;
            data = RowFilter::apply(&data, &expr);
        }

        if let Some(text) = stage(&spec.order_by) {
            let sort = SortSpec::parse(text)?;
            data = RowSorter::apply(&data, &sort);
        }

        if let Some(text) = stage(&spec.aggregate) {
            let agg = AggregateSpec::parse(text)?;
            let value = Aggregator::apply(&data, &agg)?;
            return Ok(QueryOutput::Aggregate {
                kind: agg.kind,
                value,
            });
        }

        Ok(QueryOutput::Rows(data))
    }
}

/// Treats empty flag text the same as an absent flag
fn stage(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|t| !t.is_empty())
}
