//! Sortable table component
//!
//! Thin Dioxus shell over `webgenie_core::TableView`: the component owns a
//! `SortState` signal, header buttons feed it through `handle_sort`, and the
//! rest of the markup is a pure function of columns, data and that state.

use dioxus::prelude::*;
use webgenie_core::{Cell, Column, Row, SortState, TableBody, TableView};

use crate::styles::*;
use crate::ThemeCtx;

#[component]
pub fn SortableTable(
    columns: Vec<Column<Element>>,
    data: Vec<Row>,
    on_row_click: Option<EventHandler<Row>>,
) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    // Starts unsorted; lives as long as this table instance
    let mut sort = use_signal(SortState::new);

    let state = sort.read().clone();
    let TableView { headers, body } = TableView::build(&columns, &data, &state);
    let clickable = on_row_click.is_some();

    let body_nodes = match body {
        TableBody::Rows(rows) => rsx! {
            for (idx, rendered) in rows.into_iter().enumerate() {
                {
                    let row = rendered.row.clone();
                    rsx! {
                        tr {
                            key: "{idx}",
                            style: "{tr_style(dark, clickable)}",
                            onclick: move |_| {
                                if let Some(handler) = on_row_click {
                                    handler.call(row.clone());
                                }
                            },
                            for cell in rendered.cells {
                                td { style: "{td_style(dark)}", {cell_node(cell)} }
                            }
                        }
                    }
                }
            }
        },
        TableBody::Empty { message, colspan } => rsx! {
            tr {
                td { colspan: "{colspan}", style: "{empty_cell_style(dark)}", "{message}" }
            }
        },
    };

    rsx! {
        div { style: "{table_wrapper_style(dark)}",
            table { style: "{table_style(dark)}",
                thead {
                    tr {
                        for header in headers {
                            if header.sortable {
                                {
                                    let key = header.key.clone();
                                    rsx! {
                                        th {
                                            key: "{header.key}",
                                            style: "{th_style(dark)}",
                                            "aria-sort": header.indicator.aria_sort(),
                                            button {
                                                r#type: "button",
                                                style: "{sort_btn_style(dark)}",
                                                onclick: move |_| sort.write().handle_sort(&key),
                                                "{header.label}"
                                                span {
                                                    style: "{sort_icon_style(dark, header.indicator)}",
                                                    "{header.indicator.glyph()}"
                                                }
                                            }
                                        }
                                    }
                                }
                            } else {
                                th { key: "{header.key}", style: "{th_style(dark)}", "{header.label}" }
                            }
                        }
                    }
                }
                tbody { {body_nodes} }
            }
        }
    }
}

fn cell_node(cell: Cell<Element>) -> Element {
    match cell {
        Cell::Rendered(element) => element,
        Cell::Text(text) => rsx! { "{text}" },
    }
}
