//! Catalog list pages and detail-reference parsing.

use serde::{Deserialize, Serialize};

/// One entry of a catalog list page: a name plus the detail reference
/// from which the item's identifier is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Display name in lowercase slug form.
    pub name: String,
    /// Detail-reference URL, e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
    pub url: String,
}

impl ListEntry {
    /// Parses the identifier out of this entry's detail reference.
    pub fn id(&self) -> u32 {
        extract_id(&self.url)
    }
}

/// An offset-based page of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    /// Entries in upstream listing order.
    pub entries: Vec<ListEntry>,
    /// Opaque reference to the next page; absent on the last page.
    pub next: Option<String>,
}

impl ListPage {
    /// Returns true if another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Parses the trailing path segment of a detail reference as an integer.
///
/// The upstream API hands out references shaped like
/// `https://pokeapi.co/api/v2/pokemon/25/`. A reference that does not
/// carry an integer segment yields the sentinel `0` rather than an
/// error, so a single malformed entry cannot abort a page fetch.
pub fn extract_id(reference: &str) -> u32 {
    reference
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================
