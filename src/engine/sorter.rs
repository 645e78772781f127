//! Stable sorting of datasets by a coerced field key

use std::cmp::Ordering;

use crate::dataset::{Dataset, Row};
use crate::expr::{Scalar, SortDirection, SortSpec};

/// Sorts dataset rows by one field
pub struct RowSorter;

impl RowSorter {
    /// Returns a reordered copy of the dataset.
    ///
    /// The sort is stable: rows with equal keys keep their input order,
    /// in both directions. Rows missing the sort field take the empty
    /// string as their key.
    pub fn apply(dataset: &Dataset, spec: &SortSpec) -> Dataset {
        let col = dataset.column_index(&spec.field);
        let mut rows = dataset.rows.clone();
        rows.sort_by(|a, b| {
            let ordering = Self::compare_keys(&Self::sort_key(a, col), &Self::sort_key(b, col));
            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        dataset.with_rows(rows)
    }

    /// Coerced sort key for one row
    fn sort_key(row: &Row, col: Option<usize>) -> Scalar {
        match col.and_then(|i| row.get(i)) {
            Some(cell) => Scalar::coerce(cell),
            None => Scalar::Str(String::new()),
        }
    }

    /// Total order over coerced keys.
    ///
    /// Ordering rules:
    /// - numeric keys order before string keys
    /// - numerics compare as f64
    /// - strings compare case-sensitively
    fn compare_keys(a: &Scalar, b: &Scalar) -> Ordering {
        let type_order = |s: &Scalar| -> u8 {
            match s {
                Scalar::Int(_) | Scalar::Float(_) => 0,
                Scalar::Str(_) => 1,
            }
        };

        match type_order(a).cmp(&type_order(b)) {
            Ordering::Equal => match (a, b) {
                (Scalar::Str(a_s), Scalar::Str(b_s)) => a_s.cmp(b_s),
                _ => {
                    let a_f = a.as_f64().unwrap_or(0.0);
                    let b_f = b.as_f64().unwrap_or(0.0);
                    a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
                }
            },
            other => other,
        }
    }
}
