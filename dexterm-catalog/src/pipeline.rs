//! The catalog acquisition pipeline.
//!
//! Orchestrates paginated browsing and filtered browsing as two
//! mutually exclusive modes over one accumulated item state.

use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use dexterm_api::CatalogSource;
use dexterm_core::{CatalogItem, extract_id};

use crate::cache::TypeCache;
use crate::error::CatalogError;

// ============================================================================
// Constants
// ============================================================================

/// Items requested per list page.
pub const PAGE_SIZE: u32 = 20;

/// Highest identifier the catalog currently assigns. Type membership
/// lists include alternate forms with five-digit ids whose detail
/// records are not useful here; anything above this is dropped before
/// hydration.
pub const MAX_CATALOG_ID: u32 = 1025;

/// Cap on members hydrated per type, bounding the fan-out.
pub const MAX_CATEGORY_MEMBERS: usize = 100;

// ============================================================================
// Browse Mode
// ============================================================================

/// Which of the two mutually exclusive display modes is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowseMode {
    /// Paginated browsing, accumulating pages.
    #[default]
    Normal,
    /// Type-filtered browsing; pagination is suspended.
    Filtered,
}

// ============================================================================
// Inner State
// ============================================================================

/// Pagination and accumulation state behind the pipeline's lock.
#[derive(Debug)]
struct PipelineState {
    offset: u32,
    has_more: bool,
    loading: bool,
    /// Items accumulated across normal-mode pages, in listing order.
    items: Vec<CatalogItem>,
    /// The current filtered-mode result.
    filtered: Vec<CatalogItem>,
    mode: BrowseMode,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            offset: 0,
            has_more: true,
            loading: false,
            items: Vec::new(),
            filtered: Vec::new(),
            mode: BrowseMode::Normal,
        }
    }
}

// ============================================================================
// Catalog Pipeline
// ============================================================================

/// Orchestrates list pagination, detail hydration, and type filtering.
///
/// The pipeline owns the [`TypeCache`] and all accumulated item state;
/// consumers receive copies and never mutate pipeline internals.
pub struct CatalogPipeline {
    source: Arc<dyn CatalogSource>,
    cache: TypeCache,
    state: RwLock<PipelineState>,
}

impl CatalogPipeline {
    /// Creates a pipeline over the given catalog source.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            cache: TypeCache::new(),
            state: RwLock::new(PipelineState::default()),
        }
    }

    // ========================================================================
    // Normal (paginated) mode
    // ========================================================================

    /// Loads the next catalog page and appends its hydrated items.
    ///
    /// Returns `Ok(None)` without any remote call when a load is
    /// already in flight, when the last page has been reached, or when
    /// filtered mode is active. Otherwise returns the items appended by
    /// this call (which can be fewer than the page size when individual
    /// detail fetches fail).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Fetch`] when the list-page fetch itself
    /// fails; `offset` and `has_more` are left untouched in that case.
    pub async fn load_next_page(&self) -> Result<Option<Vec<CatalogItem>>, CatalogError> {
        let offset = {
            let mut state = self.state.write().await;
            if state.loading || !state.has_more || state.mode == BrowseMode::Filtered {
                debug!(
                    loading = state.loading,
                    has_more = state.has_more,
                    mode = ?state.mode,
                    "Skipping page load"
                );
                return Ok(None);
            }
            state.loading = true;
            state.offset
        };

        let page = match self.source.fetch_list_page(offset, PAGE_SIZE).await {
            Ok(page) => page,
            Err(e) => {
                self.state.write().await.loading = false;
                return Err(e.into());
            }
        };

        let has_next = page.has_next();
        let ids: Vec<u32> = page.entries.iter().map(|e| extract_id(&e.url)).collect();
        let hydrated = self.hydrate(&ids).await;

        info!(
            offset = offset,
            listed = ids.len(),
            hydrated = hydrated.len(),
            "Page loaded"
        );

        let mut state = self.state.write().await;
        state.items.extend(hydrated.iter().cloned());
        state.offset = offset + PAGE_SIZE;
        state.has_more = has_next;
        state.loading = false;

        Ok(Some(hydrated))
    }

    /// Repositions pagination at the given offset.
    ///
    /// Discards the accumulated normal-mode items so the next page load
    /// starts fresh from `offset`. A no-op while a load is in flight or
    /// while filtered mode is active.
    pub async fn seek(&self, offset: u32) {
        let mut state = self.state.write().await;
        if state.loading || state.mode == BrowseMode::Filtered {
            debug!(offset = offset, "Ignoring seek");
            return;
        }
        state.offset = offset;
        state.has_more = true;
        state.items.clear();
    }

    /// Fetches details for the given ids concurrently.
    ///
    /// Failed fetches are dropped from the result; survivors keep the
    /// input order.
    async fn hydrate(&self, ids: &[u32]) -> Vec<CatalogItem> {
        let fetches = ids.iter().map(|id| {
            let key = id.to_string();
            async move { self.source.fetch_item_detail(&key).await }
        });

        join_all(fetches)
            .await
            .into_iter()
            .zip(ids)
            .filter_map(|(result, id)| match result {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(id = id, error = %e, "Dropping item that failed to hydrate");
                    None
                }
            })
            .collect()
    }

    // ========================================================================
    // Filtered mode
    // ========================================================================

    /// Resolves one type to its hydrated member items, with caching.
    ///
    /// Any failure during resolution degrades to an empty result for
    /// that type rather than an error; filtering is best-effort.
    pub async fn resolve_category(&self, name: &str) -> Vec<CatalogItem> {
        if let Some(cached) = self.cache.get(name).await {
            debug!(name = %name, count = cached.len(), "Type cache hit");
            return cached;
        }

        let members = match self.source.fetch_category_members(name).await {
            Ok(members) => members,
            Err(e) => {
                warn!(name = %name, error = %e, "Type resolution failed");
                return Vec::new();
            }
        };

        let ids: Vec<u32> = members
            .iter()
            .map(|e| extract_id(&e.url))
            .filter(|id| *id <= MAX_CATALOG_ID)
            .take(MAX_CATEGORY_MEMBERS)
            .collect();

        let items = self.hydrate(&ids).await;
        self.cache.put(name, items.clone()).await;
        items
    }

    /// Resolves several types and intersects their memberships by id.
    ///
    /// An item is kept only if its identifier appears in every resolved
    /// set. Duplicates are collapsed keeping the first occurrence and
    /// the result is sorted ascending by id, so the output is
    /// deterministic and independent of the input order.
    pub async fn resolve_multiple_categories(&self, names: &[String]) -> Vec<CatalogItem> {
        match names {
            [] => Vec::new(),
            [single] => self.resolve_category(single).await,
            _ => {
                let resolutions =
                    join_all(names.iter().map(|name| self.resolve_category(name))).await;

                let id_sets: Vec<HashSet<u32>> = resolutions
                    .iter()
                    .map(|items| items.iter().map(|i| i.id).collect())
                    .collect();

                let mut seen = HashSet::new();
                let mut result: Vec<CatalogItem> = resolutions
                    .into_iter()
                    .flatten()
                    .filter(|item| id_sets.iter().all(|set| set.contains(&item.id)))
                    .filter(|item| seen.insert(item.id))
                    .collect();

                result.sort_by_key(|item| item.id);
                result
            }
        }
    }

    /// Applies a type filter, switching modes as needed.
    ///
    /// A non-empty set activates filtered mode and returns the
    /// intersected result; an empty set restores normal mode and
    /// returns the accumulated normal-mode sequence.
    pub async fn set_filter(&self, names: &[String]) -> Vec<CatalogItem> {
        if names.is_empty() {
            return self.clear_filter().await;
        }

        let resolved = self.resolve_multiple_categories(names).await;

        let mut state = self.state.write().await;
        state.mode = BrowseMode::Filtered;
        state.has_more = false;
        state.filtered = resolved.clone();
        resolved
    }

    /// Deactivates filtering and restores the normal-mode sequence.
    pub async fn clear_filter(&self) -> Vec<CatalogItem> {
        let mut state = self.state.write().await;
        state.mode = BrowseMode::Normal;
        state.has_more = true;
        state.filtered.clear();
        state.items.clone()
    }

    // ========================================================================
    // Shared state
    // ========================================================================

    /// The items currently visible, selected by mode.
    pub async fn items(&self) -> Vec<CatalogItem> {
        let state = self.state.read().await;
        match state.mode {
            BrowseMode::Normal => state.items.clone(),
            BrowseMode::Filtered => state.filtered.clone(),
        }
    }

    /// Clears the type cache and resets pagination to its initial
    /// state. Favorites are unaffected.
    pub async fn refresh(&self) {
        self.cache.clear().await;
        let mut state = self.state.write().await;
        *state = PipelineState::default();
        info!("Pipeline refreshed");
    }

    /// Current pagination offset.
    pub async fn offset(&self) -> u32 {
        self.state.read().await.offset
    }

    /// Whether another page is available.
    pub async fn has_more(&self) -> bool {
        self.state.read().await.has_more
    }

    /// Whether a page load is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// The active browse mode.
    pub async fn mode(&self) -> BrowseMode {
        self.state.read().await.mode
    }

    /// Read access to the type cache.
    pub fn cache(&self) -> &TypeCache {
        &self.cache
    }
}
