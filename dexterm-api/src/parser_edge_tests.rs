//! Wire-format edge case tests.
//!
//! These verify decoder behavior with partial, null-heavy, or otherwise
//! awkward upstream payloads. The upstream API nulls out sprite fields
//! for many items and the decoders must not fail on them.

use crate::response::{DetailResponse, ListResponse, TypeResponse};

// ============================================================================
// Detail Edge Cases
// ============================================================================

#[test]
fn test_detail_minimal_payload() {
    let json = r#"{"id": 1, "name": "bulbasaur"}"#;
    let item = serde_json::from_str::<DetailResponse>(json)
        .unwrap()
        .into_item();

    assert_eq!(item.id, 1);
    assert!(item.types.is_empty());
    assert!(item.stats.is_empty());
    assert!(item.images.is_empty());
    assert_eq!(item.best_image(), None);
}

#[test]
fn test_detail_null_sprites() {
    let json = r#"{
        "id": 10143,
        "name": "some-form",
        "sprites": {
            "front_default": null,
            "other": {"official-artwork": {"front_default": null}}
        }
    }"#;
    let item = serde_json::from_str::<DetailResponse>(json)
        .unwrap()
        .into_item();
    assert!(item.images.is_empty());
}

#[test]
fn test_detail_artwork_missing_sprite_present() {
    let json = r#"{
        "id": 132,
        "name": "ditto",
        "sprites": {"front_default": "https://example.test/132.png", "other": {}}
    }"#;
    let item = serde_json::from_str::<DetailResponse>(json)
        .unwrap()
        .into_item();
    assert_eq!(item.best_image(), Some("https://example.test/132.png"));
    assert_eq!(item.images.len(), 1);
}

#[test]
fn test_detail_unknown_fields_ignored() {
    let json = r#"{
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "abilities": [{"ability": {"name": "static"}}],
        "cries": {"latest": "x.ogg"}
    }"#;
    assert!(serde_json::from_str::<DetailResponse>(json).is_ok());
}

// ============================================================================
// List Edge Cases
// ============================================================================

#[test]
fn test_list_null_next_on_last_page() {
    let json = r#"{"count": 2, "next": null, "previous": "prev", "results": []}"#;
    let page = serde_json::from_str::<ListResponse>(json)
        .unwrap()
        .into_page();
    assert!(!page.has_next());
    assert!(page.entries.is_empty());
}

#[test]
fn test_list_missing_results_defaults_empty() {
    let json = r#"{"count": 0, "next": null}"#;
    let page = serde_json::from_str::<ListResponse>(json)
        .unwrap()
        .into_page();
    assert!(page.entries.is_empty());
}

// ============================================================================
// Type Membership Edge Cases
// ============================================================================

#[test]
fn test_type_empty_membership() {
    let json = r#"{"pokemon": []}"#;
    let entries = serde_json::from_str::<TypeResponse>(json)
        .unwrap()
        .into_entries();
    assert!(entries.is_empty());
}

#[test]
fn test_type_missing_membership_defaults_empty() {
    let json = r#"{"name": "stellar", "id": 19}"#;
    let entries = serde_json::from_str::<TypeResponse>(json)
        .unwrap()
        .into_entries();
    assert!(entries.is_empty());
}

#[test]
fn test_type_member_with_malformed_reference() {
    // Parses fine; the sentinel id shows up at extraction time.
    let json = r#"{"pokemon": [{"pokemon": {"name": "glitch", "url": "no-id-here"}, "slot": 1}]}"#;
    let entries = serde_json::from_str::<TypeResponse>(json)
        .unwrap()
        .into_entries();
    assert_eq!(entries[0].id(), 0);
}
