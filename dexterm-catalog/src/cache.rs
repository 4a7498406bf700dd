//! Per-type resolution cache.

use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use dexterm_core::CatalogItem;

/// Process-lifetime cache of resolved type memberships.
///
/// Keyed by the exact type-name string. Entries live until [`clear`]
/// is called; there is no TTL and no eviction, so the map grows with
/// the number of distinct types resolved in a session (at most the
/// known type count, so this stays small in practice).
///
/// Concurrent misses for the same name are not coalesced; both callers
/// fetch and the later `put` wins. That duplicate fetch is an accepted
/// simplification.
///
/// [`clear`]: TypeCache::clear
#[derive(Debug, Default)]
pub struct TypeCache {
    entries: RwLock<HashMap<String, Vec<CatalogItem>>>,
}

impl TypeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached resolution for a type, if present.
    ///
    /// A miss is signaled with `None`, not an error.
    pub async fn get(&self, name: &str) -> Option<Vec<CatalogItem>> {
        self.entries.read().await.get(name).cloned()
    }

    /// Stores a resolution, overwriting any prior entry for the name.
    pub async fn put(&self, name: &str, items: Vec<CatalogItem>) {
        debug!(name = %name, count = items.len(), "Caching type resolution");
        self.entries.write().await.insert(name.to_string(), items);
    }

    /// Empties the cache entirely.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        debug!(evicted = entries.len(), "Clearing type cache");
        entries.clear();
    }

    /// Number of cached type resolutions.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            types: Vec::new(),
            height: 0,
            weight: 0,
            stats: Vec::new(),
            images: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let cache = TypeCache::new();
        assert!(cache.get("fire").await.is_none());

        cache.put("fire", vec![item(4, "charmander")]).await;

        let cached = cache.get("fire").await.unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].id, 4);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = TypeCache::new();
        cache.put("water", vec![item(7, "squirtle")]).await;
        cache.put("water", vec![item(54, "psyduck"), item(55, "golduck")]).await;

        assert_eq!(cache.get("water").await.unwrap().len(), 2);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_clear_empties_everything() {
        let cache = TypeCache::new();
        cache.put("fire", Vec::new()).await;
        cache.put("water", Vec::new()).await;
        assert_eq!(cache.len().await, 2);

        cache.clear().await;
        assert!(cache.is_empty().await);
        assert!(cache.get("fire").await.is_none());
    }

    #[tokio::test]
    async fn test_keys_are_exact_strings() {
        let cache = TypeCache::new();
        cache.put("fire", vec![item(4, "charmander")]).await;
        assert!(cache.get("Fire").await.is_none());
        assert!(cache.get("fire ").await.is_none());
    }
}
