// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # dexterm API
//!
//! Read-only client for the public PokeAPI catalog.
//!
//! This crate covers the four remote operations the rest of dexterm
//! needs:
//!
//! - list page (offset/limit pagination)
//! - item detail by id or name
//! - type membership by name
//! - the set of all type names
//!
//! All operations are side-effect-free apart from the network call, and
//! none of them retry: a failure is surfaced to the caller as an
//! [`ApiError`].
//!
//! The [`CatalogSource`] trait is the seam between the client and the
//! acquisition pipeline; tests substitute in-memory sources for it.
//!
//! ## Example
//!
//! ```ignore
//! use dexterm_api::PokeApiClient;
//!
//! let client = PokeApiClient::new()?;
//! let page = client.fetch_list_page(0, 20).await?;
//! let detail = client.fetch_item_detail("pikachu").await?;
//! ```

pub mod client;
pub mod error;
pub mod response;
pub mod source;

pub use client::PokeApiClient;
pub use error::ApiError;
pub use source::CatalogSource;

#[cfg(test)]
mod parser_edge_tests;
