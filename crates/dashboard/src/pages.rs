//! Dashboard pages: Compare, Datasets and Run details

use dioxus::prelude::*;
use webgenie_core::{
    presets, to_fixed, BenchmarkCatalog, CellValue, Column, Dataset, Metric, PerformanceMetrics,
    PredictedEdge, Row, DEFAULT_DATASET,
};

use crate::download::{download_csv, download_json};
use crate::styles::*;
use crate::table::SortableTable;
use crate::ThemeCtx;

/// Showcased run on the Run details page
const RUN_ALGORITHM: &str = "GENIE3";

fn number(value: Option<&CellValue>) -> f64 {
    value.and_then(CellValue::as_number).unwrap_or_default()
}

/// Flip `metric` in the selection; always-shown metrics stay put
fn toggle_metric(selection: &mut Vec<Metric>, metric: Metric) {
    if metric.always_shown() {
        return;
    }
    if let Some(pos) = selection.iter().position(|m| *m == metric) {
        selection.remove(pos);
    } else {
        selection.push(metric);
    }
}

fn runtime_tone(seconds: f64) -> Tone {
    if seconds < 200.0 {
        Tone::Success
    } else if seconds < 400.0 {
        Tone::Warning
    } else {
        Tone::Neutral
    }
}

fn memory_tone(gigabytes: f64) -> Tone {
    if gigabytes < 2.0 {
        Tone::Success
    } else if gigabytes < 4.0 {
        Tone::Warning
    } else {
        Tone::Neutral
    }
}

fn source_tone(source: &str) -> Tone {
    match source {
        "curated" => Tone::Success,
        "real" => Tone::Info,
        _ => Tone::Neutral,
    }
}

// ============================================================================
// Compare
// ============================================================================

fn performance_view_columns(dark: bool, selected: &[Metric]) -> Vec<Column<Element>> {
    let mut columns = vec![Column::sortable("algorithm", "Algorithm").render(|value, _| {
        let name = CellValue::text_of(value);
        rsx! {
            span { style: "{dot_style(color_for(&name))}" }
            span { style: "font-weight: 500;", "{name}" }
        }
    })];

    for metric in Metric::columns_for(selected) {
        let column = Column::sortable(metric.key(), metric.label());
        columns.push(match metric {
            Metric::Runtime => column.render(move |value, _| {
                let seconds = number(value);
                rsx! { span { style: "{badge_style(dark, runtime_tone(seconds))}", "{metric.format(seconds)}" } }
            }),
            Metric::Memory => column.render(move |value, _| {
                let gigabytes = number(value);
                rsx! { span { style: "{badge_style(dark, memory_tone(gigabytes))}", "{metric.format(gigabytes)}" } }
            }),
            _ => column.render(move |value, _| {
                rsx! { span { style: "font-variant-numeric: tabular-nums;", "{metric.format(number(value))}" } }
            }),
        });
    }
    columns
}

#[component]
pub fn ComparePage(catalog: BenchmarkCatalog) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let mut dataset_id = use_signal(|| DEFAULT_DATASET.to_string());
    let mut selected = use_signal(|| Metric::DEFAULT_SELECTION.to_vec());

    let current = dataset_id.read().clone();
    let metrics: Vec<PerformanceMetrics> = catalog.performance_for(&current).to_vec();
    let rows: Vec<Row> = metrics.iter().map(PerformanceMetrics::to_row).collect();
    let selection = selected.read().clone();
    let columns = performance_view_columns(dark, &selection);

    let benchmarked: Vec<&Dataset> = catalog
        .datasets
        .iter()
        .filter(|d| catalog.performance.contains_key(&d.id))
        .collect();

    let best = metrics
        .iter()
        .max_by(|a, b| a.auroc.total_cmp(&b.auroc))
        .map(|m| (m.algorithm.clone(), to_fixed(m.auroc, 3)));
    let fastest = metrics
        .iter()
        .min_by(|a, b| a.runtime.total_cmp(&b.runtime))
        .map(|m| (m.algorithm.clone(), Metric::Runtime.format(m.runtime)));

    let algorithm_count = metrics.len();
    let csv_name = format!("webgenie-{}-metrics.csv", current);
    let json_name = format!("webgenie-{}-metrics.json", current);
    let csv_rows = rows.clone();
    let csv_selection = selection.clone();

    rsx! {
        div {
            h2 { style: "{page_title_style(dark)}", "Compare algorithms" }
            p { style: "{muted_style(dark)}", "Benchmark results of GRN inference algorithms on one dataset." }

            div { style: "{stats_grid_style(dark)}",
                div { style: "{stat_card_style(dark)}",
                    div { style: "{stat_label_style(dark)}", "Algorithms" }
                    div { style: "{stat_value_style(dark)}", "{algorithm_count}" }
                }
                if let Some((name, auroc)) = best {
                    div { style: "{stat_card_style(dark)}",
                        div { style: "{stat_label_style(dark)}", "Best AUROC" }
                        div { style: "{stat_value_style(dark)}", "{auroc}" }
                        div { style: "{muted_style(dark)}", "{name}" }
                    }
                }
                if let Some((name, runtime)) = fastest {
                    div { style: "{stat_card_style(dark)}",
                        div { style: "{stat_label_style(dark)}", "Fastest" }
                        div { style: "{stat_value_style(dark)}", "{runtime}" }
                        div { style: "{muted_style(dark)}", "{name}" }
                    }
                }
            }

            div { style: "{card_style(dark)}",
                div { style: "{card_header_style(dark)}",
                    div { style: "{toolbar_style(dark)}",
                        span { style: "{card_title_style(dark)}", "Performance" }
                        select {
                            style: "{select_style(dark)}",
                            value: "{current}",
                            onchange: move |evt| dataset_id.set(evt.value()),
                            for dataset in benchmarked {
                                option { key: "{dataset.id}", value: "{dataset.id}",
                                    "{dataset.name} ({dataset.organism})"
                                }
                            }
                        }
                    }
                    div { style: "{toolbar_style(dark)}",
                        button {
                            style: "{action_btn_style(dark)}",
                            onclick: move |_| {
                                download_csv(&csv_name, presets::performance_columns(&csv_selection), &csv_rows)
                            },
                            "Export CSV"
                        }
                        button {
                            style: "{action_btn_style(dark)}",
                            onclick: move |_| download_json(&json_name, serde_json::to_string_pretty(&metrics)),
                            "Export JSON"
                        }
                    }
                }
                div { style: "padding: 0.75rem 1rem; {toolbar_style(dark)}",
                    span { style: "{muted_style(dark)} font-size: 0.8rem;", "Metrics:" }
                    for metric in Metric::ALL {
                        {
                            let locked = metric.always_shown();
                            let active = locked || selection.contains(&metric);
                            rsx! {
                                button {
                                    key: "{metric}",
                                    style: "{chip_style(dark, active, locked)}",
                                    disabled: locked,
                                    onclick: move |_| toggle_metric(&mut selected.write(), metric),
                                    "{metric.label()}"
                                }
                            }
                        }
                    }
                }
                SortableTable { columns, data: rows }
            }
        }
    }
}

// ============================================================================
// Datasets
// ============================================================================

fn dataset_view_columns(dark: bool) -> Vec<Column<Element>> {
    vec![
        Column::sortable("name", "Dataset").render(|value, _| {
            rsx! { span { style: "font-weight: 600;", "{CellValue::text_of(value)}" } }
        }),
        Column::sortable("organism", "Organism"),
        Column::sortable("type", "Type"),
        Column::sortable("genes", "Genes"),
        Column::sortable("cells", "Cells"),
        Column::sortable("edges", "Edges"),
        Column::new("source", "Source").render(move |value, _| {
            let source = CellValue::text_of(value);
            rsx! { span { style: "{badge_style(dark, source_tone(&source))}", "{source}" } }
        }),
        Column::sortable("lastUpdated", "Last Updated"),
    ]
}

#[component]
pub fn DatasetsPage(catalog: BenchmarkCatalog) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let mut search = use_signal(String::new);
    let mut organism = use_signal(|| None::<String>);
    let mut open_dataset = use_signal(|| None::<String>);

    let query = search.read().clone();
    let organism_filter = organism.read().clone();

    // Filtering is the caller's job; the table only sorts what it is given
    let rows: Vec<Row> = catalog
        .filter_datasets(&query, organism_filter.as_deref())
        .into_iter()
        .map(Dataset::to_row)
        .collect();

    let organisms: Vec<String> = catalog.organisms().into_iter().map(String::from).collect();
    let total = catalog.datasets.len();
    let shown = rows.len();
    let ground_truth_edges: u64 = catalog.datasets.iter().map(|d| u64::from(d.edges)).sum();

    let detail = open_dataset
        .read()
        .as_deref()
        .and_then(|id| catalog.dataset(id))
        .cloned();

    rsx! {
        div {
            h2 { style: "{page_title_style(dark)}", "Datasets" }
            p { style: "{muted_style(dark)}", "Expression datasets with ground-truth networks. Click a row for details." }

            div { style: "{stats_grid_style(dark)}",
                div { style: "{stat_card_style(dark)}",
                    div { style: "{stat_label_style(dark)}", "Datasets" }
                    div { style: "{stat_value_style(dark)}", "{total}" }
                }
                div { style: "{stat_card_style(dark)}",
                    div { style: "{stat_label_style(dark)}", "Organisms" }
                    div { style: "{stat_value_style(dark)}", "{organisms.len()}" }
                }
                div { style: "{stat_card_style(dark)}",
                    div { style: "{stat_label_style(dark)}", "Ground-truth edges" }
                    div { style: "{stat_value_style(dark)}", "{ground_truth_edges}" }
                }
            }

            div { style: "{card_style(dark)}",
                div { style: "{card_header_style(dark)}",
                    div { style: "{toolbar_style(dark)}",
                        input {
                            style: "{search_input_style(dark)}",
                            r#type: "search",
                            placeholder: "Search by name or organism...",
                            value: "{query}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                        select {
                            style: "{select_style(dark)}",
                            onchange: move |evt| {
                                let value = evt.value();
                                organism.set(if value.is_empty() { None } else { Some(value) });
                            },
                            option { value: "", selected: organism_filter.is_none(), "All organisms" }
                            for name in organisms.iter() {
                                option {
                                    key: "{name}",
                                    value: "{name}",
                                    selected: organism_filter.as_deref() == Some(name.as_str()),
                                    "{name}"
                                }
                            }
                        }
                    }
                    span { style: "{muted_style(dark)} font-size: 0.8rem;", "{shown} of {total}" }
                }
                SortableTable {
                    columns: dataset_view_columns(dark),
                    data: rows,
                    on_row_click: move |row: Row| open_dataset.set(Some(row.text("id"))),
                }
            }

            if let Some(dataset) = detail {
                DatasetModal { dataset, on_close: move |_| open_dataset.set(None) }
            }
        }
    }
}

/// Detail modal for one dataset
#[component]
fn DatasetModal(dataset: Dataset, on_close: EventHandler<()>) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();
    let source = dataset.source.as_str();

    rsx! {
        div {
            style: "{modal_overlay_style(dark)}",
            onclick: move |_| on_close.call(()),

            div {
                style: "{modal_content_style(dark)}",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    div { style: "display: flex; align-items: center; gap: 0.5rem;",
                        span { style: "{card_title_style(dark)} font-size: 1.2rem;", "{dataset.name}" }
                        span { style: "{badge_style(dark, source_tone(source))}", "{source}" }
                    }
                    button {
                        style: "{close_btn_style(dark)}",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                p { style: "{muted_style(dark)} margin-top: 0.5rem;", "{dataset.description}" }

                div { style: "{detail_grid_style(dark)}",
                    DetailItem { label: "Organism", value: dataset.organism.clone() }
                    DetailItem { label: "Type", value: dataset.kind.clone() }
                    DetailItem { label: "Genes", value: dataset.genes.to_string() }
                    DetailItem { label: "Cells", value: dataset.cells.to_string() }
                    DetailItem { label: "Ground-truth edges", value: dataset.edges.to_string() }
                    DetailItem { label: "Last updated", value: dataset.last_updated.format("%b %-d, %Y").to_string() }
                }
            }
        }
    }
}

#[component]
fn DetailItem(label: &'static str, value: String) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        div {
            div { style: "{stat_label_style(dark)}", "{label}" }
            div { style: "font-weight: 500;", "{value}" }
        }
    }
}

// ============================================================================
// Run details
// ============================================================================

fn edge_view_columns(dark: bool) -> Vec<Column<Element>> {
    vec![
        Column::sortable("source", "Source Gene").render(move |value, _| {
            rsx! { code { style: "{code_style(dark)}", "{CellValue::text_of(value)}" } }
        }),
        Column::sortable("target", "Target Gene").render(move |value, _| {
            rsx! { code { style: "{code_style(dark)}", "{CellValue::text_of(value)}" } }
        }),
        Column::sortable("score", "Confidence Score").render(move |value, _| {
            let score = number(value);
            rsx! {
                span { style: "{score_track_style(dark)}",
                    span { style: "{score_fill_style(score)}" }
                }
                span { style: "font-variant-numeric: tabular-nums;", "{to_fixed(score, 3)}" }
            }
        }),
        Column::sortable("runtime", "Runtime (s)").render(|value, _| {
            rsx! { "{to_fixed(number(value), 3)}" }
        }),
        Column::new("type", "Edge Type").render(move |value, _| {
            let kind = CellValue::text_of(value);
            let tone = if kind == "activation" { Tone::Info } else { Tone::Warning };
            rsx! { span { style: "{badge_style(dark, tone)}", "{kind}" } }
        }),
        Column::new("validated", "Validated").render(move |value, _| {
            match value.and_then(CellValue::as_bool) {
                Some(true) => rsx! { span { style: "{badge_style(dark, Tone::Success)}", "✓ Yes" } },
                _ => rsx! { span { style: "{badge_style(dark, Tone::Neutral)}", "Predicted" } },
            }
        }),
    ]
}

/// Edges whose source or target gene contains `query` (case-insensitive)
fn filter_edges<'a>(edges: &'a [PredictedEdge], query: &str) -> Vec<&'a PredictedEdge> {
    let query = query.trim().to_lowercase();
    edges
        .iter()
        .filter(|e| {
            e.source.to_lowercase().contains(&query) || e.target.to_lowercase().contains(&query)
        })
        .collect()
}

#[component]
pub fn RunDetailsPage(catalog: BenchmarkCatalog) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let mut gene = use_signal(String::new);
    let query = gene.read().clone();

    let edges: Vec<PredictedEdge> = filter_edges(&catalog.top_edges, &query)
        .into_iter()
        .cloned()
        .collect();
    let rows: Vec<Row> = edges.iter().map(PredictedEdge::to_row).collect();

    let validated = catalog.top_edges.iter().filter(|e| e.validated).count();
    let mean_score = if catalog.top_edges.is_empty() {
        0.0
    } else {
        catalog.top_edges.iter().map(|e| e.score).sum::<f64>() / catalog.top_edges.len() as f64
    };
    let run_metrics = catalog
        .performance_for(DEFAULT_DATASET)
        .iter()
        .find(|m| m.algorithm == RUN_ALGORITHM)
        .cloned();

    let csv_rows = rows.clone();

    rsx! {
        div {
            h2 { style: "{page_title_style(dark)}", "Run details" }
            p { style: "{muted_style(dark)}",
                "Top predicted edges of {RUN_ALGORITHM} on {DEFAULT_DATASET}."
            }

            div { style: "{stats_grid_style(dark)}",
                div { style: "{stat_card_style(dark)}",
                    div { style: "{stat_label_style(dark)}", "Top edges" }
                    div { style: "{stat_value_style(dark)}", "{catalog.top_edges.len()}" }
                }
                div { style: "{stat_card_style(dark)}",
                    div { style: "{stat_label_style(dark)}", "Validated" }
                    div { style: "{stat_value_style(dark)}", "{validated}" }
                }
                div { style: "{stat_card_style(dark)}",
                    div { style: "{stat_label_style(dark)}", "Mean score" }
                    div { style: "{stat_value_style(dark)}", "{to_fixed(mean_score, 3)}" }
                }
                if let Some(m) = run_metrics {
                    div { style: "{stat_card_style(dark)}",
                        div { style: "{stat_label_style(dark)}", "AUROC / AUPRC" }
                        div { style: "{stat_value_style(dark)}", "{to_fixed(m.auroc, 3)} / {to_fixed(m.auprc, 3)}" }
                    }
                }
            }

            div { style: "{card_style(dark)}",
                div { style: "{card_header_style(dark)}",
                    div { style: "{toolbar_style(dark)}",
                        span { style: "{card_title_style(dark)}", "Predicted edges" }
                        input {
                            style: "{search_input_style(dark)}",
                            r#type: "search",
                            placeholder: "Filter by gene...",
                            value: "{query}",
                            oninput: move |evt| gene.set(evt.value()),
                        }
                    }
                    div { style: "{toolbar_style(dark)}",
                        button {
                            style: "{action_btn_style(dark)}",
                            onclick: move |_| download_csv("webgenie-top-edges.csv", presets::edge_columns(), &csv_rows),
                            "Export CSV"
                        }
                        button {
                            style: "{action_btn_style(dark)}",
                            onclick: move |_| download_json("webgenie-top-edges.json", serde_json::to_string_pretty(&edges)),
                            "Export JSON"
                        }
                    }
                }
                SortableTable { columns: edge_view_columns(dark), data: rows }
            }
        }
    }
}
