// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # dexterm Core
//!
//! Core types and models for the dexterm catalog browser.
//!
//! This crate provides the foundational types used across all other
//! dexterm crates, including:
//!
//! - Domain models (catalog items, list pages, favorites)
//! - Detail-reference parsing
//!
//! ## Key Types
//!
//! ### Catalog Types
//! - [`CatalogItem`] - A fully hydrated creature record
//! - [`StatValue`] / [`StatKind`] - Per-stat integer values
//! - [`ListEntry`] / [`ListPage`] - One page of the paginated catalog
//! - [`TypeKind`] - Fixed enumeration of known type tags
//!
//! ### Favorites
//! - [`FavoriteRecord`] - A locally persisted favorite summary

pub mod models;

// Re-export all model types
pub use models::{
    // Catalog types
    CatalogItem,
    ListEntry,
    ListPage,
    StatKind,
    StatValue,
    // Type tags
    TypeKind,
    // Favorites
    FavoriteRecord,
    // Reference parsing
    extract_id,
};
