//! Error types for rulenorm.

use thiserror::Error;

/// Error type for rulenorm operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unsupported rule-set format version
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u32),
}

/// Result type alias for rulenorm operations.
pub type Result<T> = std::result::Result<T, Error>;
