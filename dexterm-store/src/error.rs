//! Store error types.

use thiserror::Error;

/// Errors that can occur persisting or loading the favorites file.
///
/// These never propagate out of the store's mutation API; they are
/// caught and logged, and the in-memory collection stays authoritative
/// for the session.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns true if the error is "file does not exist", which on
    /// first launch is the normal case rather than a problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
