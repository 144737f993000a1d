//! Plain-text column sets for the benchmark tables
//!
//! Shared by terminal output and file exports.

use crate::catalog::Metric;
use crate::column::Column;
use crate::value::{to_fixed, CellValue};

fn number(value: Option<&CellValue>) -> f64 {
    value.and_then(CellValue::as_number).unwrap_or_default()
}

/// Algorithm column followed by the selected metric columns
pub fn performance_columns(selected: &[Metric]) -> Vec<Column<String>> {
    let mut columns = vec![Column::sortable("algorithm", "Algorithm")];
    for metric in Metric::columns_for(selected) {
        columns.push(
            Column::sortable(metric.key(), metric.label())
                .render(move |value, _| metric.format(number(value))),
        );
    }
    columns
}

pub fn dataset_columns() -> Vec<Column<String>> {
    vec![
        Column::sortable("name", "Dataset"),
        Column::sortable("organism", "Organism"),
        Column::sortable("type", "Type"),
        Column::sortable("genes", "Genes"),
        Column::sortable("cells", "Cells"),
        Column::sortable("edges", "Edges"),
        Column::new("source", "Source"),
        Column::sortable("lastUpdated", "Last Updated"),
    ]
}

pub fn edge_columns() -> Vec<Column<String>> {
    vec![
        Column::sortable("source", "Source Gene"),
        Column::sortable("target", "Target Gene"),
        Column::sortable("score", "Confidence Score").render(|v, _| to_fixed(number(v), 3)),
        Column::sortable("runtime", "Runtime (s)").render(|v, _| to_fixed(number(v), 3)),
        Column::new("type", "Edge Type"),
        Column::new("validated", "Validated").render(|v, _| {
            match v.and_then(CellValue::as_bool) {
                Some(true) => "✓ Yes".to_string(),
                _ => "Predicted".to_string(),
            }
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::validate_columns;
    use crate::mock::mock_catalog;
    use crate::table::SortableTable;
    use crate::value::Row;

    #[test]
    fn test_column_sets_have_unique_keys() {
        assert!(validate_columns(&performance_columns(&Metric::ALL)).is_ok());
        assert!(validate_columns(&dataset_columns()).is_ok());
        assert!(validate_columns(&edge_columns()).is_ok());
    }

    #[test]
    fn test_performance_table_formats_metrics() {
        let catalog = mock_catalog();
        let rows: Vec<Row> = catalog
            .performance_for("hESC")
            .iter()
            .map(|m| m.to_row())
            .collect();
        let mut table = SortableTable::new(performance_columns(&[Metric::Auroc, Metric::Runtime]));
        table.click_header("runtime");

        let view = table.view(&rows);
        let first: Vec<&str> = view.rows()[0].cells.iter().map(|c| c.as_text()).collect();
        assert_eq!(first, vec!["PPCOR", "0.789", "0.723", "108s"]);
    }

    #[test]
    fn test_edge_validated_badge() {
        let rows: Vec<Row> = mock_catalog().top_edges.iter().map(|e| e.to_row()).collect();
        let table = SortableTable::new(edge_columns());
        let view = table.view(&rows);

        let validated: Vec<&str> = view
            .rows()
            .iter()
            .take(4)
            .map(|r| r.cells[5].as_text())
            .collect();
        assert_eq!(validated, vec!["✓ Yes", "✓ Yes", "✓ Yes", "Predicted"]);
    }
}
