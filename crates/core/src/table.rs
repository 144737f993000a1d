//! Sortable table: render model and headless component
//!
//! [`TableView::build`] is a pure function of columns, rows and sort state.
//! UI layers keep a [`SortState`] of their own and rebuild the view on every
//! render; [`SortableTable`] bundles the same pieces for callers that do not
//! have a reactive runtime (the CLI, tests).

use crate::column::{Cell, Column};
use crate::sort::{sort_rows, SortIndicator, SortState};
use crate::value::Row;
use std::rc::Rc;

/// Placeholder shown when there are no rows
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// One header cell
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Always `SortIndicator::None` for non-sortable columns
    pub indicator: SortIndicator,
}

/// One body row: the source record and its rendered cells
#[derive(Debug)]
pub struct RenderedRow<'a, E> {
    pub row: &'a Row,
    pub cells: Vec<Cell<E>>,
}

/// Table body
#[derive(Debug)]
pub enum TableBody<'a, E> {
    Rows(Vec<RenderedRow<'a, E>>),
    /// Single full-width placeholder row
    Empty {
        message: &'static str,
        colspan: usize,
    },
}

/// Everything needed to paint a table once
#[derive(Debug)]
pub struct TableView<'a, E> {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody<'a, E>,
}

impl<'a, E> TableView<'a, E> {
    /// Build the view for `data` under `state`
    ///
    /// `data` is only borrowed; ordering happens on a vector of references.
    pub fn build(columns: &[Column<E>], data: &'a [Row], state: &SortState) -> Self {
        let headers = columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.label.clone(),
                sortable: column.sortable,
                indicator: if column.sortable {
                    state.indicator(&column.key)
                } else {
                    SortIndicator::None
                },
            })
            .collect();

        let body = if data.is_empty() {
            TableBody::Empty {
                message: NO_RESULTS_MESSAGE,
                colspan: columns.len(),
            }
        } else {
            TableBody::Rows(
                sort_rows(data, state)
                    .into_iter()
                    .map(|row| RenderedRow {
                        row,
                        cells: columns.iter().map(|c| c.render_cell(row)).collect(),
                    })
                    .collect(),
            )
        };

        Self { headers, body }
    }

    /// Data rows in display order (empty for the placeholder body)
    pub fn rows(&self) -> &[RenderedRow<'a, E>] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, TableBody::Empty { .. })
    }
}

/// Callback invoked with the activated row
pub type RowClickHandler = Rc<dyn Fn(&Row)>;

/// Headless sortable table: columns, sort state and an optional row-click
/// callback
pub struct SortableTable<E> {
    columns: Vec<Column<E>>,
    state: SortState,
    on_row_click: Option<RowClickHandler>,
}

impl<E> SortableTable<E> {
    pub fn new(columns: Vec<Column<E>>) -> Self {
        Self {
            columns,
            state: SortState::new(),
            on_row_click: None,
        }
    }

    pub fn on_row_click(mut self, handler: impl Fn(&Row) + 'static) -> Self {
        self.on_row_click = Some(Rc::new(handler));
        self
    }

    pub fn columns(&self) -> &[Column<E>] {
        &self.columns
    }

    pub fn sort_state(&self) -> &SortState {
        &self.state
    }

    /// Activate the header of `key`
    ///
    /// Returns `false` when the header is inert (unknown or non-sortable
    /// column) and the state was left alone.
    pub fn click_header(&mut self, key: &str) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|column| column.key == key && column.sortable);
        if sortable {
            self.state.handle_sort(key);
        }
        sortable
    }

    /// Activate a row; forwards to the callback, if any
    pub fn click_row(&self, row: &Row) {
        if let Some(handler) = &self.on_row_click {
            handler(row);
        }
    }

    pub fn view<'a>(&self, data: &'a [Row]) -> TableView<'a, E> {
        TableView::build(&self.columns, data, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;
    use crate::value::{to_fixed, to_percent, CellValue};
    use pretty_assertions::assert_eq;
    use std::cell::{Cell as StdCell, RefCell};

    fn fixed3(value: Option<&CellValue>, _row: &Row) -> String {
        to_fixed(value.and_then(CellValue::as_number).unwrap_or_default(), 3)
    }

    fn benchmark_rows() -> Vec<Row> {
        vec![
            Row::new().with("algorithm", "GENIE3").with("auroc", 0.847),
            Row::new().with("algorithm", "PPCOR").with("auroc", 0.612),
        ]
    }

    fn benchmark_table() -> SortableTable<String> {
        SortableTable::new(vec![
            Column::sortable("algorithm", "Algorithm"),
            Column::sortable("auroc", "AUROC").render(fixed3),
        ])
    }

    fn cell_texts(view: &TableView<'_, String>) -> Vec<Vec<String>> {
        view.rows()
            .iter()
            .map(|r| r.cells.iter().map(|c| c.as_text().to_string()).collect())
            .collect()
    }

    fn key_order(view: &TableView<'_, String>, key: &str) -> Vec<String> {
        view.rows().iter().map(|r| r.row.text(key)).collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let data = benchmark_rows();
        let mut table = benchmark_table();

        assert_eq!(
            cell_texts(&table.view(&data)),
            vec![vec!["GENIE3", "0.847"], vec!["PPCOR", "0.612"]]
        );

        assert!(table.click_header("auroc"));
        assert_eq!(
            cell_texts(&table.view(&data)),
            vec![vec!["PPCOR", "0.612"], vec!["GENIE3", "0.847"]]
        );

        assert!(table.click_header("auroc"));
        assert_eq!(
            cell_texts(&table.view(&data)),
            vec![vec!["GENIE3", "0.847"], vec!["PPCOR", "0.612"]]
        );
    }

    #[test]
    fn test_unsorted_preserves_input_order() {
        let data = vec![
            Row::new().with("algorithm", "SINCERITIES"),
            Row::new().with("algorithm", "GENIE3"),
            Row::new().with("algorithm", "PIDC"),
        ];
        let table: SortableTable<String> =
            SortableTable::new(vec![Column::sortable("algorithm", "Algorithm")]);

        assert_eq!(
            key_order(&table.view(&data), "algorithm"),
            vec!["SINCERITIES", "GENIE3", "PIDC"]
        );
    }

    #[test]
    fn test_toggle_asc_desc_asc() {
        let data = vec![
            Row::new().with("runtime", 252.0),
            Row::new().with("runtime", 108.0),
            Row::new().with("runtime", 486.0),
        ];
        let mut table: SortableTable<String> =
            SortableTable::new(vec![Column::sortable("runtime", "Runtime (s)")]);

        let expected = [
            (SortDirection::Asc, vec!["108", "252", "486"]),
            (SortDirection::Desc, vec!["486", "252", "108"]),
            (SortDirection::Asc, vec!["108", "252", "486"]),
        ];
        for (direction, order) in expected {
            table.click_header("runtime");
            assert_eq!(table.sort_state().direction(), direction);
            assert_eq!(key_order(&table.view(&data), "runtime"), order);
        }
    }

    #[test]
    fn test_new_column_starts_ascending() {
        let data = benchmark_rows();
        for clicks_on_first in 1..=2 {
            let mut table = benchmark_table();
            for _ in 0..clicks_on_first {
                table.click_header("auroc");
            }

            table.click_header("algorithm");
            assert_eq!(table.sort_state().active_key(), Some("algorithm"));
            assert_eq!(table.sort_state().direction(), SortDirection::Asc);
            assert_eq!(
                key_order(&table.view(&data), "algorithm"),
                vec!["GENIE3", "PPCOR"]
            );
        }
    }

    #[test]
    fn test_caller_data_untouched() {
        let data = vec![
            Row::new().with("auroc", 0.9),
            Row::new().with("auroc", 0.1),
            Row::new().with("auroc", 0.5),
        ];
        let snapshot = data.clone();
        let addresses: Vec<*const Row> = data.iter().map(|r| r as *const Row).collect();

        let mut table = benchmark_table();
        for _ in 0..5 {
            table.click_header("auroc");
            let view = table.view(&data);
            // Rendered rows point into the caller's storage
            for rendered in view.rows() {
                assert!(addresses.contains(&(rendered.row as *const Row)));
            }
        }

        assert_eq!(data, snapshot);
        let after: Vec<*const Row> = data.iter().map(|r| r as *const Row).collect();
        assert_eq!(after, addresses);
    }

    #[test]
    fn test_empty_data_placeholder() {
        let data: Vec<Row> = Vec::new();
        let mut table = benchmark_table();
        table.click_header("auroc");

        let view = table.view(&data);
        assert!(view.is_empty());
        assert!(view.rows().is_empty());
        match view.body {
            TableBody::Empty { message, colspan } => {
                assert_eq!(message, NO_RESULTS_MESSAGE);
                assert_eq!(colspan, 2);
            }
            TableBody::Rows(_) => panic!("expected placeholder"),
        }

        let no_columns: SortableTable<String> = SortableTable::new(Vec::new());
        assert!(no_columns.view(&data).is_empty());
    }

    #[test]
    fn test_render_precedence() {
        let data = vec![Row::new().with("auroc", 0.847)];
        let table: SortableTable<String> = SortableTable::new(vec![Column::sortable(
            "auroc", "AUROC",
        )
        .render(|value, _| to_percent(value.and_then(CellValue::as_number).unwrap_or_default()))]);

        assert_eq!(cell_texts(&table.view(&data)), vec![vec!["84.7%"]]);
    }

    #[test]
    fn test_renderer_called_once_per_cell() {
        let calls = Rc::new(StdCell::new(0));
        let counter = calls.clone();
        let table: SortableTable<String> = SortableTable::new(vec![
            Column::new("algorithm", "Algorithm"),
            Column::new("auroc", "AUROC").render(move |value, row| {
                counter.set(counter.get() + 1);
                fixed3(value, row)
            }),
        ]);

        table.view(&benchmark_rows());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_non_sortable_header_is_inert() {
        let data = benchmark_rows();
        let mut table: SortableTable<String> = SortableTable::new(vec![
            Column::new("algorithm", "Algorithm"),
            Column::sortable("auroc", "AUROC"),
        ]);

        assert!(!table.click_header("algorithm"));
        assert_eq!(table.sort_state().active_key(), None);

        table.click_header("auroc");
        table.click_header("auroc");
        let before = key_order(&table.view(&data), "algorithm");

        assert!(!table.click_header("algorithm"));
        assert!(!table.click_header("no_such_column"));
        assert_eq!(table.sort_state().active_key(), Some("auroc"));
        assert_eq!(table.sort_state().direction(), SortDirection::Desc);
        assert_eq!(key_order(&table.view(&data), "algorithm"), before);
    }

    #[test]
    fn test_header_indicators() {
        let mut table: SortableTable<String> = SortableTable::new(vec![
            Column::new("type", "Edge Type"),
            Column::sortable("score", "Confidence Score"),
            Column::sortable("runtime", "Runtime (s)"),
        ]);
        let data = Vec::new();

        let indicators = |t: &SortableTable<String>| -> Vec<SortIndicator> {
            t.view(&data).headers.iter().map(|h| h.indicator).collect()
        };

        assert_eq!(indicators(&table), vec![SortIndicator::None; 3]);

        table.click_header("score");
        assert_eq!(
            indicators(&table),
            vec![SortIndicator::None, SortIndicator::Ascending, SortIndicator::None]
        );

        table.click_header("score");
        assert_eq!(
            indicators(&table),
            vec![SortIndicator::None, SortIndicator::Descending, SortIndicator::None]
        );
    }

    #[test]
    fn test_missing_keys_render_blank() {
        let data = vec![Row::new().with("algorithm", "PIDC")];
        let table: SortableTable<String> = SortableTable::new(vec![
            Column::sortable("algorithm", "Algorithm"),
            Column::sortable("memory", "Memory (GB)"),
        ]);

        assert_eq!(cell_texts(&table.view(&data)), vec![vec!["PIDC", ""]]);
    }

    #[test]
    fn test_row_click_passthrough() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = clicked.clone();
        let mut table = benchmark_table().on_row_click(move |row| {
            sink.borrow_mut().push(row.text("algorithm"));
        });
        let data = benchmark_rows();

        table.click_header("auroc");
        let before = table.sort_state().clone();
        let view = table.view(&data);
        table.click_row(view.rows()[0].row);

        assert_eq!(*clicked.borrow(), vec!["PPCOR".to_string()]);
        assert_eq!(table.sort_state(), &before);
    }
}
