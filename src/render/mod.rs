//! Result rendering
//!
//! Renders the pipeline output either as a human-readable table or as one
//! JSON document. Both shapes handle row output and aggregate output
//! uniformly: an aggregate renders as a one-column table headed by the
//! aggregator-kind name.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde_json::{json, Value};

use crate::engine::QueryOutput;
use crate::expr::Scalar;

/// Message printed instead of an empty table
const NO_DATA_MESSAGE: &str = "No data matching the given conditions";

/// Renders pipeline output for the terminal or for machines
pub struct Renderer;

impl Renderer {
    /// Renders the output as a table. An empty row set renders as a
    /// "no matching data" message instead of a bare header grid.
    pub fn table(output: &QueryOutput) -> String {
        match output {
            QueryOutput::Rows(dataset) => {
                if dataset.is_empty() {
                    return NO_DATA_MESSAGE.to_string();
                }
                let mut table = new_table();
                table.set_header(dataset.columns.iter().map(Cell::new));
                for row in &dataset.rows {
                    table.add_row(row.iter().map(Cell::new));
                }
                table.to_string()
            }
            QueryOutput::Aggregate { kind, value } => {
                let mut table = new_table();
                table.set_header(vec![Cell::new(kind.as_str())]);
                table.add_row(vec![Cell::new(value.to_string())]);
                table.to_string()
            }
        }
    }

    /// Renders the output as one JSON document: `{columns, rows, count}`
    /// for row output, `{kind: [value]}` for aggregate output.
    pub fn json(output: &QueryOutput) -> String {
        let value = match output {
            QueryOutput::Rows(dataset) => json!({
                "columns": &dataset.columns,
                "rows": &dataset.rows,
                "count": dataset.len(),
            }),
            QueryOutput::Aggregate { kind, value } => json!({
                (kind.as_str()): [scalar_to_json(value)],
            }),
        };
        value.to_string()
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn scalar_to_json(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Int(i) => json!(i),
        Scalar::Float(f) => json!(f),
        Scalar::Str(s) => json!(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::expr::AggregateKind;

    fn rows_output() -> QueryOutput {
        QueryOutput::Rows(Dataset::new(
            vec!["name".to_string(), "price".to_string()],
            vec![vec!["redmi".to_string(), "199".to_string()]],
        ))
    }

    #[test]
    fn test_table_contains_header_and_cells() {
        let rendered = Renderer::table(&rows_output());
        assert!(rendered.contains("name"));
        assert!(rendered.contains("redmi"));
        assert!(rendered.contains("199"));
    }

    #[test]
    fn test_empty_rows_render_message() {
        let output = QueryOutput::Rows(Dataset::new(
            vec!["name".to_string()],
            Vec::new(),
        ));
        assert_eq!(Renderer::table(&output), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_aggregate_table_headed_by_kind() {
        let output = QueryOutput::Aggregate {
            kind: AggregateKind::Avg,
            value: Scalar::Int(674),
        };
        let rendered = Renderer::table(&output);
        assert!(rendered.contains("avg"));
        assert!(rendered.contains("674"));
    }

    #[test]
    fn test_json_rows_shape() {
        let rendered = Renderer::json(&rows_output());
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["rows"][0][0], "redmi");
    }

    #[test]
    fn test_json_aggregate_shape() {
        let output = QueryOutput::Aggregate {
            kind: AggregateKind::Median,
            value: Scalar::Float(649.5),
        };
        let rendered = Renderer::json(&output);
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["median"][0], 649.5);
    }
}
