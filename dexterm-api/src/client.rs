//! The reqwest-backed PokeAPI client.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use dexterm_core::{CatalogItem, ListEntry, ListPage};

use crate::error::ApiError;
use crate::response::{DetailResponse, ListResponse, TypeResponse};

/// Public PokeAPI base URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Read-only client for the remote catalog.
///
/// Requests are not retried; a transport failure is returned to the
/// caller, which decides how to present it.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    inner: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client against the public PokeAPI.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let inner = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("dexterm/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches one page of the catalog listing.
    pub async fn fetch_list_page(&self, offset: u32, limit: u32) -> Result<ListPage, ApiError> {
        let url = format!("{}/pokemon?offset={offset}&limit={limit}", self.base_url);
        let response: ListResponse = self.get_json(&url).await?;
        Ok(response.into_page())
    }

    /// Fetches the full detail for one item, by id or slug name.
    pub async fn fetch_item_detail(&self, id_or_name: &str) -> Result<CatalogItem, ApiError> {
        let url = format!("{}/pokemon/{id_or_name}", self.base_url);
        let response: DetailResponse = self.get_json(&url).await?;
        Ok(response.into_item())
    }

    /// Fetches the member list of one type.
    pub async fn fetch_category_members(
        &self,
        type_name: &str,
    ) -> Result<Vec<ListEntry>, ApiError> {
        let url = format!("{}/type/{type_name}", self.base_url);
        let response: TypeResponse = self.get_json(&url).await?;
        Ok(response.into_entries())
    }

    /// Fetches the names of all types known upstream.
    pub async fn fetch_category_names(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/type?limit=100", self.base_url);
        let response: ListResponse = self.get_json(&url).await?;
        Ok(response.results.into_iter().map(|r| r.name).collect())
    }

    /// Performs a GET request and decodes the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url = %url, "Making GET request");

        let response = self.inner.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        decode_body(&body)
    }
}

/// Decodes a response body, classifying parse failures as
/// [`ApiError::Json`] rather than as transport errors.
fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(ApiError::Json)
}

// ============================================================================
// Tests
// ============================================================================
