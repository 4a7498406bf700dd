// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # dexterm Store
//!
//! Persisted favorites for the dexterm application.
//!
//! This crate provides:
//!
//! - **`FavoritesStore`**: the in-memory favorites collection with a
//!   watch channel for change notification, rewritten to disk on every
//!   mutation
//! - **Persistence**: JSON file I/O helpers and default paths
//!
//! ## Usage
//!
//! ```ignore
//! use dexterm_store::FavoritesStore;
//!
//! let store = FavoritesStore::load_default().await;
//!
//! store.add(&item).await;
//! assert!(store.is_favorite(item.id).await);
//!
//! // Subscribe to changes; the receiver sees the current collection
//! // immediately and again after every mutation.
//! let mut rx = store.subscribe();
//! let favorites = rx.borrow().clone();
//! ```

pub mod error;
pub mod favorites;
pub mod persistence;

pub use error::StoreError;
pub use favorites::FavoritesStore;
pub use persistence::{default_config_dir, default_favorites_path, load_json, save_json};
#[cfg(test)]
mod persistence_tests;
