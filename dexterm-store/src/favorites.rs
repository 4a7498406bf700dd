//! The persisted favorites store.
//!
//! One store instance is constructed at application start and passed by
//! handle to every consumer. Change notification goes through a watch
//! channel that carries the full collection, so a new subscriber sees
//! the current state immediately and every mutation after that.

use std::path::PathBuf;
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

use dexterm_core::{CatalogItem, FavoriteRecord};

use crate::persistence::{default_favorites_path, load_json, save_json};

/// Observable, persisted collection of favorited item summaries.
///
/// Invariant: at most one record per identifier. The whole collection
/// is loaded once at construction and rewritten to disk on every
/// mutation; persistence failures are logged and never interrupt the
/// in-memory operation.
pub struct FavoritesStore {
    records: RwLock<Vec<FavoriteRecord>>,
    notify: watch::Sender<Vec<FavoriteRecord>>,
    path: PathBuf,
}

impl FavoritesStore {
    /// Loads the store from the given favorites file.
    ///
    /// A missing file is the normal first-launch case; a malformed one
    /// is treated as absent. Neither fails construction.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let records: Vec<FavoriteRecord> = match load_json(&path).await {
            Ok(records) => records,
            Err(e) if e.is_not_found() => {
                debug!(path = %path.display(), "No favorites file yet");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Favorites file unreadable, starting empty");
                Vec::new()
            }
        };

        info!(count = records.len(), "Favorites loaded");

        let (notify, _) = watch::channel(records.clone());
        Self {
            records: RwLock::new(records),
            notify,
            path,
        }
    }

    /// Loads the store from the default platform path.
    pub async fn load_default() -> Self {
        Self::load(default_favorites_path()).await
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Adds an item to the favorites.
    ///
    /// Silently idempotent: if a record with the same identifier
    /// already exists it is kept, original timestamp included.
    pub async fn add(&self, item: &CatalogItem) {
        {
            let mut records = self.records.write().await;
            if records.iter().any(|r| r.id == item.id) {
                debug!(id = item.id, "Already a favorite");
                return;
            }
            records.push(FavoriteRecord::from_item(item));
        }
        info!(id = item.id, name = %item.name, "Favorite added");
        self.persist_and_notify().await;
    }

    /// Removes an identifier from the favorites.
    ///
    /// Removing an absent identifier is a no-op, not an error.
    pub async fn remove(&self, id: u32) {
        let removed = {
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|r| r.id != id);
            records.len() != before
        };

        if removed {
            info!(id = id, "Favorite removed");
            self.persist_and_notify().await;
        } else {
            debug!(id = id, "Not a favorite, nothing to remove");
        }
    }

    /// Removes every favorite.
    pub async fn clear(&self) {
        let had_any = {
            let mut records = self.records.write().await;
            let had_any = !records.is_empty();
            records.clear();
            had_any
        };

        if had_any {
            info!("All favorites removed");
            self.persist_and_notify().await;
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns true if the identifier is favorited.
    pub async fn is_favorite(&self, id: u32) -> bool {
        self.records.read().await.iter().any(|r| r.id == id)
    }

    /// Returns a copy of the current collection, in insertion order.
    pub async fn favorites(&self) -> Vec<FavoriteRecord> {
        self.records.read().await.clone()
    }

    /// Number of favorites.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if nothing is favorited.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    // ========================================================================
    // Observable
    // ========================================================================

    /// Subscribes to collection changes.
    ///
    /// The receiver's initial value is the current collection.
    pub fn subscribe(&self) -> watch::Receiver<Vec<FavoriteRecord>> {
        self.notify.subscribe()
    }

    /// Rewrites the collection to disk and emits it to subscribers.
    ///
    /// A write failure leaves the in-memory collection authoritative
    /// for the rest of the session.
    async fn persist_and_notify(&self) {
        let snapshot = self.records.read().await.clone();

        if let Err(e) = save_json(&self.path, &snapshot).await {
            warn!(path = %self.path.display(), error = %e, "Failed to persist favorites");
        }

        // send_replace updates the channel value even with no receivers,
        // so a later subscriber still sees the current collection.
        self.notify.send_replace(snapshot);
    }
}
