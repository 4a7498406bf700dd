//! Catalog error types.

use thiserror::Error;

use dexterm_api::ApiError;

/// Errors surfaced by the acquisition pipeline.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The remote catalog fetch failed as a whole.
    ///
    /// Individual detail fetches inside a hydration fan-out never
    /// produce this; they are dropped at the fan-out boundary.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] ApiError),
}
