//! Error types for webgenie-core (WASM-compatible)

use thiserror::Error;

/// Result type alias for webgenie-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that work in both native and WASM environments
#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate column key: {0}")]
    DuplicateColumnKey(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
