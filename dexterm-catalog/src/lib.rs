// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # dexterm Catalog
//!
//! The catalog acquisition pipeline for dexterm.
//!
//! This crate orchestrates how catalog items reach the presentation
//! layer:
//!
//! - **Normal mode**: paginated list fetches with concurrent detail
//!   hydration, accumulating items across pages.
//! - **Filtered mode**: per-type membership resolution with caching,
//!   and multi-type set intersection by identifier.
//!
//! The pipeline talks to the remote catalog only through the
//! [`dexterm_api::CatalogSource`] trait, so everything here is testable
//! against an in-memory source.
//!
//! ## Example
//!
//! ```ignore
//! use dexterm_api::PokeApiClient;
//! use dexterm_catalog::CatalogPipeline;
//! use std::sync::Arc;
//!
//! let client = Arc::new(PokeApiClient::new()?);
//! let pipeline = CatalogPipeline::new(client);
//!
//! let page = pipeline.load_next_page().await?;
//! let fire_flying = pipeline
//!     .resolve_multiple_categories(&["fire".into(), "flying".into()])
//!     .await;
//! ```

pub mod cache;
pub mod error;
pub mod pipeline;

pub use cache::TypeCache;
pub use error::CatalogError;
pub use pipeline::{
    BrowseMode, CatalogPipeline, MAX_CATALOG_ID, MAX_CATEGORY_MEMBERS, PAGE_SIZE,
};
