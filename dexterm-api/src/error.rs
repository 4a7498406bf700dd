//! API error types.

use thiserror::Error;

/// Error type for remote catalog operations.
///
/// `Http` and `Status` are transport failures; `Json` means the body
/// arrived but could not be parsed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the catalog.
    #[error("Unexpected status {status} for {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// Response body was not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response parsed but did not carry the expected fields.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
