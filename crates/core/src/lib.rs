//! webgenie-core - Sortable benchmark tables for webgenie
//!
//! This crate contains WASM-compatible code that can be shared between
//! the CLI and the dashboard.
//!
//! # Features
//!
//! - Schema-less rows and typed column descriptors with custom renderers
//! - Sort state machine (unsorted, ascending, descending) and comparator
//! - Pure table view model, CSV and Markdown export
//! - BEELINE datasets, algorithms and performance metrics, plus mock data

pub mod catalog;
pub mod collate;
pub mod column;
pub mod error;
pub mod export;
pub mod mock;
pub mod presets;
pub mod sort;
pub mod table;
pub mod value;

pub use catalog::{
    Algorithm, BenchmarkCatalog, Dataset, DatasetSource, EdgeType, Metric, PerformanceMetrics,
    PredictedEdge,
};
pub use column::{validate_columns, Cell, CellRenderer, Column};
pub use error::{Error, Result};
pub use mock::{mock_catalog, DEFAULT_DATASET};
pub use sort::{compare_values, sort_rows, SortDirection, SortIndicator, SortState};
pub use table::{
    HeaderCell, RenderedRow, RowClickHandler, SortableTable, TableBody, TableView,
    NO_RESULTS_MESSAGE,
};
pub use value::{load_rows_from_file, to_fixed, to_percent, CellValue, Row};
