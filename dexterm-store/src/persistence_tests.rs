//! Favorites persistence and store behavior tests.
//!
//! Exercises file round-trips, first-launch and malformed-file startup,
//! mutation idempotency, and the watch subscription.

use tempfile::TempDir;

use crate::favorites::FavoritesStore;
use crate::persistence::{load_json, save_json};
use dexterm_core::{CatalogItem, FavoriteRecord};

fn item(id: u32, name: &str) -> CatalogItem {
    CatalogItem {
        id,
        name: name.to_string(),
        types: vec!["electric".to_string()],
        height: 4,
        weight: 60,
        stats: Vec::new(),
        images: vec![format!("https://example.test/{id}.png")],
    }
}

// ============================================================================
// JSON Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_save_and_load_json_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("favorites.json");

    let records = vec![FavoriteRecord::from_item(&item(25, "pikachu"))];

    save_json(&file_path, &records).await.unwrap();
    let loaded: Vec<FavoriteRecord> = load_json(&file_path).await.unwrap();

    assert_eq!(loaded, records);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b").join("favorites.json");

    save_json(&nested, &Vec::<FavoriteRecord>::new())
        .await
        .unwrap();
    assert!(nested.exists());
}

#[tokio::test]
async fn test_load_nonexistent_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let result: Result<Vec<FavoriteRecord>, _> =
        load_json(&temp_dir.path().join("missing.json")).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().is_not_found());
}

// ============================================================================
// Store Construction Tests
// ============================================================================

#[tokio::test]
async fn test_load_from_persisted_collection() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("favorites.json");
    tokio::fs::write(
        &path,
        r#"[{"id":25,"name":"pikachu","image":"x","dateAdded":"2024-01-01"}]"#,
    )
    .await
    .unwrap();

    let store = FavoritesStore::load(&path).await;

    assert!(store.is_favorite(25).await);
    assert_eq!(store.len().await, 1);
    assert_eq!(store.favorites().await[0].name, "pikachu");
}

#[tokio::test]
async fn test_missing_file_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = FavoritesStore::load(temp_dir.path().join("favorites.json")).await;
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_file_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("favorites.json");
    tokio::fs::write(&path, "{not json").await.unwrap();

    let store = FavoritesStore::load(&path).await;
    assert!(store.is_empty().await);
}

// ============================================================================
// Mutation Tests
// ============================================================================

#[tokio::test]
async fn test_add_persists_and_reloads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("favorites.json");

    let store = FavoritesStore::load(&path).await;
    store.add(&item(6, "charizard")).await;

    let reloaded = FavoritesStore::load(&path).await;
    assert!(reloaded.is_favorite(6).await);
}

#[tokio::test]
async fn test_add_is_idempotent_and_keeps_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let store = FavoritesStore::load(temp_dir.path().join("favorites.json")).await;

    store.add(&item(25, "pikachu")).await;
    let original = store.favorites().await[0].date_added;

    store.add(&item(25, "pikachu")).await;

    let favorites = store.favorites().await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].date_added, original);
}

#[tokio::test]
async fn test_remove_absent_id_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let store = FavoritesStore::load(temp_dir.path().join("favorites.json")).await;

    store.add(&item(1, "bulbasaur")).await;
    store.remove(999).await;

    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_remove_and_clear() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("favorites.json");
    let store = FavoritesStore::load(&path).await;

    store.add(&item(1, "bulbasaur")).await;
    store.add(&item(4, "charmander")).await;
    store.add(&item(7, "squirtle")).await;

    store.remove(4).await;
    assert!(!store.is_favorite(4).await);
    assert_eq!(store.len().await, 2);

    store.clear().await;
    assert!(store.is_empty().await);

    let reloaded = FavoritesStore::load(&path).await;
    assert!(reloaded.is_empty().await);
}

#[tokio::test]
async fn test_persist_failure_keeps_memory_authoritative() {
    let temp_dir = TempDir::new().unwrap();
    // A directory at the target path makes every rename fail.
    let path = temp_dir.path().join("favorites.json");
    tokio::fs::create_dir(&path).await.unwrap();

    let store = FavoritesStore::load(&path).await;
    store.add(&item(25, "pikachu")).await;

    assert!(store.is_favorite(25).await);
}

// ============================================================================
// Subscription Tests
// ============================================================================

#[tokio::test]
async fn test_subscribe_replays_current_state() {
    let temp_dir = TempDir::new().unwrap();
    let store = FavoritesStore::load(temp_dir.path().join("favorites.json")).await;
    store.add(&item(25, "pikachu")).await;

    let rx = store.subscribe();
    assert_eq!(rx.borrow().len(), 1);
}

#[tokio::test]
async fn test_subscribe_sees_mutations() {
    let temp_dir = TempDir::new().unwrap();
    let store = FavoritesStore::load(temp_dir.path().join("favorites.json")).await;

    let mut rx = store.subscribe();
    assert!(rx.borrow().is_empty());

    store.add(&item(25, "pikachu")).await;
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().len(), 1);

    store.remove(25).await;
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_empty());
}
