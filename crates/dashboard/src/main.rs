//! Dioxus-based dashboard for webgenie
//!
//! A pure Rust frontend that compiles to WebAssembly.
//! 100% Rust - no manually written JS/TS/CSS.
//! All styling is inline in Rust code.
//!
//! ## Pages
//!
//! - **Compare**: algorithm performance on one dataset, with metric toggles
//! - **Datasets**: searchable dataset list; a row click opens its details
//! - **Run details**: top predicted edges of the showcased inference run
//!
//! Every table is a `SortableTable`: click a header to sort ascending, click
//! it again to flip the direction.
//!
//! The catalog is read from `catalog.json` next to the page (see
//! `webgenie mock`); without one the built-in mock catalog is shown.

use dioxus::prelude::*;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use webgenie_core::{mock_catalog, BenchmarkCatalog};

mod download;
mod pages;
mod styles;
mod table;

use pages::{ComparePage, DatasetsPage, RunDetailsPage};
use styles::*;

/// Global theme context - true = dark mode
#[derive(Clone, Copy)]
struct ThemeCtx(Signal<bool>);

const CATALOG_URL: &str = "catalog.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Compare,
    Datasets,
    RunDetails,
}

impl Page {
    const ALL: [Page; 3] = [Page::Compare, Page::Datasets, Page::RunDetails];

    fn title(self) -> &'static str {
        match self {
            Page::Compare => "Compare",
            Page::Datasets => "Datasets",
            Page::RunDetails => "Run details",
        }
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    launch(App);
}

#[component]
fn App() -> Element {
    // Theme state - default to dark mode
    let dark_mode = use_signal(|| true);
    use_context_provider(|| ThemeCtx(dark_mode));

    let page = use_signal(|| Page::Compare);
    let mut catalog = use_signal(|| None::<BenchmarkCatalog>);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            match load_catalog().await {
                Ok(Some(loaded)) => {
                    info!("Loaded {} datasets from {}", loaded.datasets.len(), CATALOG_URL);
                    catalog.set(Some(loaded));
                }
                Ok(None) => {
                    info!("No {} served, using mock catalog", CATALOG_URL);
                    catalog.set(Some(mock_catalog()));
                }
                Err(e) => {
                    warn!("{}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    let dark = *dark_mode.read();

    let content = if let Some(err) = error.read().as_ref() {
        rsx! { ErrorState { message: err.clone() } }
    } else if let Some(loaded) = catalog.read().as_ref() {
        let loaded = loaded.clone();
        match *page.read() {
            Page::Compare => rsx! { ComparePage { catalog: loaded } },
            Page::Datasets => rsx! { DatasetsPage { catalog: loaded } },
            Page::RunDetails => rsx! { RunDetailsPage { catalog: loaded } },
        }
    } else {
        rsx! { LoadingState {} }
    };

    rsx! {
        div { style: "{app_style(dark)}",
            Header { page }

            main { style: "{main_content_style(dark)}",
                {content}
            }
        }
    }
}

#[component]
fn Header(page: Signal<Page>) -> Element {
    let ThemeCtx(mut dark_mode) = use_context::<ThemeCtx>();
    let mut page = page;
    let dark = *dark_mode.read();
    let current = *page.read();

    rsx! {
        header { style: "{header_style(dark)}",
            h1 { style: "{title_style(dark)}", "webgenie" }
            nav { style: "{nav_style(dark)}",
                for tab in Page::ALL {
                    button {
                        key: "{tab.title()}",
                        style: "{tab_style(dark, tab == current)}",
                        onclick: move |_| page.set(tab),
                        "{tab.title()}"
                    }
                }
            }
            button {
                style: "{toggle_btn_style(dark)}",
                onclick: move |_| {
                    let current = *dark_mode.read();
                    dark_mode.set(!current);
                },
                if dark { "☀ light" } else { "☾ dark" }
            }
        }
    }
}

#[component]
fn LoadingState() -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        div { style: "{loading_style(dark)}",
            "Loading..."
        }
    }
}

#[component]
fn ErrorState(message: String) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        div { style: "{error_style(dark)}",
            strong { "Error: " }
            "{message}"
            p { style: "{muted_style(dark)} margin-top: 0.5rem;",
                "Regenerate it with "
                code { style: "{code_style(dark)}", "webgenie mock --out dist/catalog.json" }
            }
        }
    }
}

/// Fetch the served catalog
///
/// `Ok(None)` when the server does not have one.
async fn load_catalog() -> Result<Option<BenchmarkCatalog>, String> {
    let window = web_sys::window().ok_or("No window available")?;

    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(CATALOG_URL))
        .await
        .map_err(|e| format!("Failed to fetch catalog: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Unexpected fetch result".to_string())?;

    if !response.ok() {
        return Ok(None);
    }

    let body = response
        .text()
        .map_err(|e| format!("Failed to read response: {:?}", e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| format!("Failed to read response: {:?}", e))?
        .as_string()
        .ok_or("Response body is not text")?;

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| format!("Failed to parse {}: {}", CATALOG_URL, e))
}
