//! Predicate filtering over datasets
//!
//! Selects rows whose coerced field value satisfies a single
//! field/operator/value predicate. The filter is stable: surviving rows
//! keep their input order.

use std::cmp::Ordering;

use crate::dataset::Dataset;
use crate::expr::{CompareOp, FilterExpr, Scalar};

/// Evaluates a filter predicate against every row of a dataset
pub struct RowFilter;

impl RowFilter {
    /// Applies the predicate, returning the matching subsequence of rows.
    ///
    /// A row whose cell is missing does not match; a dataset without the
    /// named column matches nothing.
    pub fn apply(dataset: &Dataset, expr: &FilterExpr) -> Dataset {
        let rows = match dataset.column_index(&expr.field) {
            Some(col) => dataset
                .rows
                .iter()
                .filter(|row| {
                    row.get(col)
                        .map(|cell| Self::matches(cell, expr))
                        .unwrap_or(false)
                })
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        dataset.with_rows(rows)
    }

    /// Checks one cell against the predicate
    fn matches(cell: &str, expr: &FilterExpr) -> bool {
        let mut actual = Scalar::coerce(cell);
        let mut expected = expr.value.clone();

        // String-vs-string comparison is case-insensitive, for the
        // ordering operators as well as equality.
        if let (Scalar::Str(a), Scalar::Str(e)) = (&actual, &expected) {
            actual = Scalar::Str(a.trim().to_lowercase());
            expected = Scalar::Str(e.trim().to_lowercase());
        }

        let ordering = Self::compare(&actual, &expected);
        match expr.op {
            CompareOp::Eq => ordering == Some(Ordering::Equal),
            CompareOp::Ne => ordering != Some(Ordering::Equal),
            CompareOp::Gt => ordering == Some(Ordering::Greater),
            CompareOp::Lt => ordering == Some(Ordering::Less),
            CompareOp::Ge => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            CompareOp::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        }
    }

    /// Compares two scalars.
    ///
    /// Numeric pairs compare numerically, string pairs lexicographically.
    /// Cross-type pairs do not compare: equality is false (so `!=` is
    /// true) and every ordering operator is false.
    fn compare(actual: &Scalar, expected: &Scalar) -> Option<Ordering> {
        match (actual, expected) {
            (Scalar::Str(a), Scalar::Str(b)) => Some(a.cmp(b)),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y),
                _ => None,
            },
        }
    }
}
