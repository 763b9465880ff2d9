use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while reading or writing project files
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file exists but does not parse
    #[error("Malformed settings file {path}: {source}")]
    MalformedSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid chapter range
    #[error("Invalid chapter range: start={start}, end={end}")]
    InvalidRange { start: u32, end: u32 },
}
