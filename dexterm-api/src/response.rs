//! Wire-format response types for the PokeAPI.
//!
//! Field shapes here are fixed by the upstream API, not by dexterm.
//! Each response type knows how to convert itself into the core model
//! it backs; unknown fields are ignored and optional fields default.

use serde::Deserialize;

use dexterm_core::{CatalogItem, ListEntry, ListPage, StatKind, StatValue};

// ============================================================================
// Shared Shapes
// ============================================================================

/// A `{ name, url }` pair, the API's universal reference shape.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    /// Resource name.
    pub name: String,
    /// Resource URL.
    #[serde(default)]
    pub url: String,
}

impl From<NamedRef> for ListEntry {
    fn from(r: NamedRef) -> Self {
        ListEntry {
            name: r.name,
            url: r.url,
        }
    }
}

// ============================================================================
// List Response
// ============================================================================

/// Response from the paginated list endpoint (and the type-list
/// endpoint, which shares the shape).
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    /// Total item count upstream.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, or null on the last page.
    pub next: Option<String>,
    /// The listed entries.
    #[serde(default)]
    pub results: Vec<NamedRef>,
}

impl ListResponse {
    /// Converts into a core list page.
    pub fn into_page(self) -> ListPage {
        ListPage {
            entries: self.results.into_iter().map(ListEntry::from).collect(),
            next: self.next,
        }
    }
}

// ============================================================================
// Item Detail Response
// ============================================================================

/// One type slot on a detail response.
#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    /// Slot index; slot 1 is the primary type.
    #[serde(default)]
    pub slot: u32,
    /// The type reference.
    #[serde(rename = "type")]
    pub type_ref: NamedRef,
}

/// One stat entry on a detail response.
#[derive(Debug, Deserialize)]
pub struct StatSlot {
    /// The base value.
    pub base_stat: u32,
    /// The stat reference.
    pub stat: NamedRef,
}

/// Nested sprite container, trimmed to the images dexterm displays.
#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    /// Plain front sprite.
    #[serde(default)]
    pub front_default: Option<String>,
    /// The `other` sprite group.
    #[serde(default)]
    pub other: SpriteOther,
}

/// The `sprites.other` group.
#[derive(Debug, Default, Deserialize)]
pub struct SpriteOther {
    /// Official artwork, the preferred image.
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: OfficialArtwork,
}

/// The `sprites.other.official-artwork` group.
#[derive(Debug, Default, Deserialize)]
pub struct OfficialArtwork {
    /// Official artwork front image.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Response from the item detail endpoint.
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    /// Stable identifier.
    pub id: u32,
    /// Slug name.
    pub name: String,
    /// Height in decimetres.
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: u32,
    /// Type slots in slot order.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Stat entries.
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    /// Sprite URLs.
    #[serde(default)]
    pub sprites: Sprites,
}

impl DetailResponse {
    /// Converts into a hydrated core item.
    ///
    /// Image ordering follows the original display preference: official
    /// artwork first, plain sprite as fallback. Type slots are sorted so
    /// slot 1 stays primary regardless of response order.
    pub fn into_item(self) -> CatalogItem {
        let mut slots = self.types;
        slots.sort_by_key(|s| s.slot);

        let mut images = Vec::new();
        if let Some(art) = self.sprites.other.official_artwork.front_default {
            images.push(art);
        }
        if let Some(sprite) = self.sprites.front_default {
            images.push(sprite);
        }

        CatalogItem {
            id: self.id,
            name: self.name,
            types: slots.into_iter().map(|s| s.type_ref.name).collect(),
            height: self.height,
            weight: self.weight,
            stats: self
                .stats
                .into_iter()
                .map(|s| StatValue {
                    name: StatKind::from_name(&s.stat.name),
                    value: s.base_stat,
                })
                .collect(),
            images,
        }
    }
}

// ============================================================================
// Type Membership Response
// ============================================================================

/// One member of a type, nested one level deeper than a plain ref.
#[derive(Debug, Deserialize)]
pub struct TypeMember {
    /// The member reference.
    pub pokemon: NamedRef,
}

/// Response from the type membership endpoint.
#[derive(Debug, Deserialize)]
pub struct TypeResponse {
    /// Members of this type.
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

impl TypeResponse {
    /// Converts into core list entries, preserving upstream order.
    pub fn into_entries(self) -> Vec<ListEntry> {
        self.pokemon
            .into_iter()
            .map(|m| ListEntry::from(m.pokemon))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_into_page() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;
        let response: ListResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page();

        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.entries[0].name, "bulbasaur");
        assert_eq!(page.entries[0].id(), 1);
        assert!(page.has_next());
    }

    #[test]
    fn test_detail_response_into_item() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ],
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
            ],
            "sprites": {
                "front_default": "https://example.test/sprite/25.png",
                "other": {
                    "official-artwork": {"front_default": "https://example.test/art/25.png"}
                }
            }
        }"#;
        let response: DetailResponse = serde_json::from_str(json).unwrap();
        let item = response.into_item();

        assert_eq!(item.id, 25);
        assert_eq!(item.primary_type(), Some("electric"));
        assert_eq!(item.best_image(), Some("https://example.test/art/25.png"));
        assert_eq!(item.images.len(), 2);
        assert_eq!(item.stat(&StatKind::Speed), Some(90));
    }

    #[test]
    fn test_detail_response_type_slots_sorted() {
        let json = r#"{
            "id": 6,
            "name": "charizard",
            "types": [
                {"slot": 2, "type": {"name": "flying", "url": ""}},
                {"slot": 1, "type": {"name": "fire", "url": ""}}
            ]
        }"#;
        let item: CatalogItem = serde_json::from_str::<DetailResponse>(json)
            .unwrap()
            .into_item();
        assert_eq!(item.types, vec!["fire", "flying"]);
    }

    #[test]
    fn test_type_response_into_entries() {
        let json = r#"{
            "pokemon": [
                {"pokemon": {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"}, "slot": 1},
                {"pokemon": {"name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon/6/"}, "slot": 1}
            ]
        }"#;
        let response: TypeResponse = serde_json::from_str(json).unwrap();
        let entries = response.into_entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].id(), 6);
    }
}
