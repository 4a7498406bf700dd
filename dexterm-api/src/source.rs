//! The catalog source trait.
//!
//! [`CatalogSource`] is the seam between the remote client and the
//! acquisition pipeline. The pipeline only talks to this trait, so
//! tests can substitute an in-memory source and the client stays the
//! only place that knows about HTTP.

use async_trait::async_trait;

use dexterm_core::{CatalogItem, ListEntry, ListPage};

use crate::client::PokeApiClient;
use crate::error::ApiError;

/// Read-only access to the remote catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches one page of the catalog listing.
    async fn fetch_list_page(&self, offset: u32, limit: u32) -> Result<ListPage, ApiError>;

    /// Fetches the full detail for one item, by id or slug name.
    async fn fetch_item_detail(&self, id_or_name: &str) -> Result<CatalogItem, ApiError>;

    /// Fetches the member list of one type.
    async fn fetch_category_members(&self, type_name: &str) -> Result<Vec<ListEntry>, ApiError>;

    /// Fetches the names of all types known upstream.
    async fn fetch_category_names(&self) -> Result<Vec<String>, ApiError>;
}

#[async_trait]
impl CatalogSource for PokeApiClient {
    async fn fetch_list_page(&self, offset: u32, limit: u32) -> Result<ListPage, ApiError> {
        PokeApiClient::fetch_list_page(self, offset, limit).await
    }

    async fn fetch_item_detail(&self, id_or_name: &str) -> Result<CatalogItem, ApiError> {
        PokeApiClient::fetch_item_detail(self, id_or_name).await
    }

    async fn fetch_category_members(&self, type_name: &str) -> Result<Vec<ListEntry>, ApiError> {
        PokeApiClient::fetch_category_members(self, type_name).await
    }

    async fn fetch_category_names(&self) -> Result<Vec<String>, ApiError> {
        PokeApiClient::fetch_category_names(self).await
    }
}
