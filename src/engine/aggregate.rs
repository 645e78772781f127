//! Column aggregation
//!
//! Reduces one column's coerced values to a single statistic. Aggregation
//! is numeric only: the first string-coerced cell aborts the reduction,
//! there is no partial aggregation over a numeric subset.

use crate::dataset::Dataset;
use crate::expr::{AggregateKind, AggregateSpec, Scalar};

use super::errors::{EngineError, EngineResult};

/// Computes a single statistic over one dataset column
pub struct Aggregator;

impl Aggregator {
    /// Computes the requested statistic.
    ///
    /// The final result narrows to `Int` when it has zero fractional
    /// part; intermediate sums stay floating-point.
    pub fn apply(dataset: &Dataset, spec: &AggregateSpec) -> EngineResult<Scalar> {
        let values = Self::numeric_column(dataset, &spec.field)?;
        let result = match spec.kind {
            AggregateKind::Min => Self::min(&values),
            AggregateKind::Max => Self::max(&values),
            AggregateKind::Avg => Self::avg(&values),
            AggregateKind::Median => Self::median(values),
        };
        Ok(Scalar::narrow(result))
    }

    /// Collects the column as floats, rejecting string values
    fn numeric_column(dataset: &Dataset, field: &str) -> EngineResult<Vec<f64>> {
        let col = dataset.column_index(field);
        let mut values = Vec::with_capacity(dataset.len());
        for row in &dataset.rows {
            let cell = col
                .and_then(|i| row.get(i))
                .map(String::as_str)
                .unwrap_or("");
            match Scalar::coerce(cell).as_f64() {
                Some(v) => values.push(v),
                None => return Err(EngineError::StringAggregation(field.to_string())),
            }
        }
        Ok(values)
    }

    fn min(values: &[f64]) -> f64 {
        let mut min_value = f64::INFINITY;
        for &v in values {
            if v < min_value {
                min_value = v;
            }
        }
        min_value
    }

    fn max(values: &[f64]) -> f64 {
        let mut max_value = f64::NEG_INFINITY;
        for &v in values {
            if v > max_value {
                max_value = v;
            }
        }
        max_value
    }

    /// Mean of the column; an empty column averages to 0
    fn avg(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Middle element of the sorted column, or the mean of the two
    /// central elements for an even count; 0 for an empty column
    fn median(mut values: Vec<f64>) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.sort_by(|a, b| a.total_cmp(b));
        let n = values.len();
        if n % 2 == 1 {
            values[n / 2]
        } else {
            (values[n / 2 - 1] + values[n / 2]) / 2.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones() -> Dataset {
        Dataset::new(
            vec![
                "name".to_string(),
                "brand".to_string(),
                "price".to_string(),
            ],
            vec![
                vec!["iphone", "apple", "999"],
                vec!["galaxy", "samsung", "1199"],
                vec!["redmi", "xiaomi", "199"],
                vec!["poco", "xiaomi", "299"],
            ]
            .into_iter()
            .map(|row| row.into_iter().map(str::to_string).collect())
            .collect(),
        )
    }

    fn aggregate(data: &Dataset, text: &str) -> EngineResult<Scalar> {
        Aggregator::apply(data, &AggregateSpec::parse(text).unwrap())
    }

    #[test]
    fn test_min_max() {
        let data = phones();
        assert_eq!(aggregate(&data, "price=min").unwrap(), Scalar::Int(199));
        assert_eq!(aggregate(&data, "price=max").unwrap(), Scalar::Int(1199));
    }

    #[test]
    fn test_avg_narrows_whole_result() {
        let data = phones();
        // (999 + 1199 + 199 + 299) / 4 = 674.0, narrowed to Int
        assert_eq!(aggregate(&data, "price=avg").unwrap(), Scalar::Int(674));
    }

    #[test]
    fn test_median_even_count() {
        let data = phones();
        // Sorted [199, 299, 999, 1199], mean of the two central = 649
        assert_eq!(aggregate(&data, "price=median").unwrap(), Scalar::Int(649));
    }

    #[test]
    fn test_median_odd_count() {
        let mut data = phones();
        data.rows.truncate(3);
        assert_eq!(aggregate(&data, "price=median").unwrap(), Scalar::Int(999));
    }

    #[test]
    fn test_fractional_result_stays_float() {
        let mut data = phones();
        data.rows.truncate(2);
        // (999 + 1199) / 2 = 1099, a whole number
        assert_eq!(aggregate(&data, "price=avg").unwrap(), Scalar::Int(1099));

        data.rows[1][2] = "1200".to_string();
        assert_eq!(
            aggregate(&data, "price=avg").unwrap(),
            Scalar::Float(1099.5)
        );
    }

    #[test]
    fn test_string_column_is_rejected() {
        let data = phones();
        assert_eq!(
            aggregate(&data, "brand=avg"),
            Err(EngineError::StringAggregation("brand".to_string()))
        );
        assert_eq!(
            aggregate(&data, "brand=min"),
            Err(EngineError::StringAggregation("brand".to_string()))
        );
    }

    #[test]
    fn test_empty_dataset_avg_and_median_are_zero() {
        let data = phones().with_rows(Vec::new());
        assert_eq!(aggregate(&data, "price=avg").unwrap(), Scalar::Int(0));
        assert_eq!(aggregate(&data, "price=median").unwrap(), Scalar::Int(0));
    }

    #[test]
    fn test_empty_dataset_min_keeps_sentinel() {
        let data = phones().with_rows(Vec::new());
        assert_eq!(
            aggregate(&data, "price=min").unwrap(),
            Scalar::Float(f64::INFINITY)
        );
        assert_eq!(
            aggregate(&data, "price=max").unwrap(),
            Scalar::Float(f64::NEG_INFINITY)
        );
    }
}
