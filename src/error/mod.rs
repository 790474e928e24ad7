//! Error types and handling for `redboard`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Fetch failures (`Network`, `HttpStatus`, `Decode`) are never fatal:
//!   the sync layer collapses them to one user-visible message on the
//!   snapshot and keeps whatever data was already displayed
//! - Local faults (config file, I/O) propagate to the CLI exit path

use thiserror::Error;

/// Result type alias for redboard operations.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Primary error type for redboard operations.
#[derive(Error, Debug)]
pub enum BoardError {
    // === Connection state ===
    /// No usable connection settings. A mode, not a failure: callers
    /// settle in demo data rather than aborting.
    #[error("not configured: set an API key and user id with `rb config set`")]
    Unconfigured,

    // === Fetch errors ===
    /// Transport-level failure (DNS, TLS, refused connection).
    #[error("request to {url} failed: {source}")]
    Network { url: String, source: reqwest::Error },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body did not match the expected wire format.
    #[error("malformed response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },

    // === Configuration errors ===
    /// Configuration file error.
    #[error("configuration error: {0}")]
    Config(String),

    // === I/O errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Whether this error came out of a remote fetch (as opposed to a
    /// local fault). Fetch failures leave the dashboard disconnected but
    /// never without data.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::HttpStatus { .. } | Self::Decode { .. }
        )
    }
}
