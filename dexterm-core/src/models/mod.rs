//! Domain models for dexterm.
//!
//! This module contains the core data structures representing catalog
//! items, list pages, type tags, and favorites. The shapes mirror what
//! the upstream PokeAPI returns, normalized into owned Rust types.
//!
//! ## Submodules
//!
//! - [`item`] - Hydrated catalog items (`CatalogItem`, `StatValue`)
//! - [`page`] - List pages and detail-reference parsing
//! - [`types`] - The fixed type-tag enumeration (`TypeKind`)
//! - [`favorite`] - Persisted favorite records

mod favorite;
mod item;
mod page;
mod types;

// Re-export everything at the models level
pub use favorite::FavoriteRecord;
pub use item::{CatalogItem, StatKind, StatValue};
pub use page::{extract_id, ListEntry, ListPage};
pub use types::TypeKind;
