//! Binary to generate the static site shell from Rust
//!
//! Run with: cargo run --bin generate_html [-- <out-dir>]
//!
//! Writes `index.html` for the Dioxus WASM app and, unless one is already
//! there, a `catalog.json` with the built-in mock catalog so the dashboard
//! has data to fetch. Replace that file with `webgenie mock` output or real
//! benchmark results.

use std::fs;
use std::path::{Path, PathBuf};
use webgenie_core::mock_catalog;

const PAGE_TITLE: &str = "webgenie - GRN benchmark explorer";
const WASM_BINDINGS: &str = "webgenie_dashboard.js";
const CATALOG_FILE: &str = "catalog.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    fs::create_dir_all(&out_dir)?;

    let index_path = out_dir.join("index.html");
    fs::write(&index_path, generate_index_html())?;
    println!("✅ Generated: {}", index_path.display());

    if let Some(catalog_path) = write_mock_catalog(&out_dir)? {
        println!("✅ Generated: {}", catalog_path.display());
    }

    Ok(())
}

/// Write the mock catalog into `out_dir` unless a catalog is already there
fn write_mock_catalog(out_dir: &Path) -> webgenie_core::Result<Option<PathBuf>> {
    let path = out_dir.join(CATALOG_FILE);
    if path.exists() {
        return Ok(None);
    }
    mock_catalog().save_to_file(&path)?;
    Ok(Some(path))
}

fn generate_index_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="Sortable benchmark tables for gene regulatory network inference algorithms">
    <title>{title}</title>
    <style>
{styles}
    </style>
</head>
<body>
    <div id="loading">loading benchmark catalog...</div>
    <noscript>webgenie needs JavaScript and WebAssembly to render its tables.</noscript>
    <div id="main"></div>
    <script type="module">
        import init from './{bindings}';
        init().then(() => {{
            document.getElementById('loading').remove();
        }});
    </script>
</body>
</html>"#,
        title = PAGE_TITLE,
        styles = get_styles(),
        bindings = WASM_BINDINGS,
    )
}

/// Global rules that inline styles cannot express (pseudo-classes)
fn get_styles() -> &'static str {
    r#"        * { margin: 0; padding: 0; box-sizing: border-box; }
        html, body { min-height: 100%; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; font-size: 14px; }
        #loading, noscript { display: block; padding: 2rem; text-align: center; font-family: inherit; }
        #main { min-height: 100vh; }
        tbody tr:hover { background: rgba(127, 127, 127, 0.08); }
        th button:focus-visible { outline: 2px solid #3b82f6; outline-offset: 2px; }"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use webgenie_core::BenchmarkCatalog;

    #[test]
    fn test_index_loads_dashboard_bindings() {
        let html = generate_index_html();

        assert!(html.contains("import init from './webgenie_dashboard.js';"));
        assert!(html.contains("<title>webgenie - GRN benchmark explorer</title>"));
        assert!(html.contains("th button:focus-visible"));
        assert!(html.contains("<div id=\"main\"></div>"));
    }

    #[test]
    fn test_mock_catalog_written_once() {
        let dir = TempDir::new().unwrap();

        let written = write_mock_catalog(dir.path()).unwrap().unwrap();
        let catalog = BenchmarkCatalog::load_from_file(&written).unwrap();
        assert_eq!(catalog, mock_catalog());

        fs::write(&written, "{}").unwrap();
        assert!(write_mock_catalog(dir.path()).unwrap().is_none());
        assert_eq!(fs::read_to_string(&written).unwrap(), "{}");
    }
}
