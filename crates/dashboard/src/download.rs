//! Client-side file downloads (CSV/JSON exports)

use tracing::{error, info};
use wasm_bindgen::{JsCast, JsValue};
use webgenie_core::{Column, Row, SortableTable};

pub const CSV_MIME: &str = "text/csv;charset=utf-8";
pub const JSON_MIME: &str = "application/json";

/// Export `rows` in caller order through plain-text `columns`
pub fn download_csv(filename: &str, columns: Vec<Column<String>>, rows: &[Row]) {
    let csv = SortableTable::new(columns).view(rows).to_csv();
    download(filename, CSV_MIME, &csv);
}

pub fn download_json(filename: &str, json: serde_json::Result<String>) {
    match json {
        Ok(text) => download(filename, JSON_MIME, &text),
        Err(e) => error!("Failed to serialize {}: {}", filename, e),
    }
}

/// Offer `content` as a file download, logging failures
pub fn download(filename: &str, mime: &str, content: &str) {
    match save_blob(filename, mime, content) {
        Ok(()) => info!("Downloaded {}", filename),
        Err(e) => error!("Failed to download {}: {:?}", filename, e),
    }
}

fn save_blob(filename: &str, mime: &str, content: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}
