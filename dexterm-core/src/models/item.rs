//! Hydrated catalog item types.
//!
//! A [`CatalogItem`] is the full record for one creature, produced by
//! fetching its detail endpoint. Items are immutable once fetched and
//! are never persisted locally in full.

use serde::{Deserialize, Serialize};

// ============================================================================
// Stat Kind
// ============================================================================

/// The fixed set of stat names the upstream catalog reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    /// Hit points.
    Hp,
    /// Physical attack.
    Attack,
    /// Physical defense.
    Defense,
    /// Special attack.
    SpecialAttack,
    /// Special defense.
    SpecialDefense,
    /// Speed.
    Speed,
    /// A stat name outside the known set, preserved verbatim.
    #[serde(untagged)]
    Other(String),
}

impl StatKind {
    /// Parses a stat name as reported by the upstream API.
    pub fn from_name(name: &str) -> Self {
        match name {
            "hp" => Self::Hp,
            "attack" => Self::Attack,
            "defense" => Self::Defense,
            "special-attack" => Self::SpecialAttack,
            "special-defense" => Self::SpecialDefense,
            "speed" => Self::Speed,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the display label for this stat.
    pub fn label(&self) -> &str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Sp. Atk",
            Self::SpecialDefense => "Sp. Def",
            Self::Speed => "Speed",
            Self::Other(name) => name,
        }
    }
}

/// A single named stat value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    /// Which stat this value belongs to.
    pub name: StatKind,
    /// The base value.
    pub value: u32,
}

// ============================================================================
// Catalog Item
// ============================================================================

/// A fully hydrated catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable identifier assigned by the remote catalog.
    pub id: u32,
    /// Display name in lowercase slug form.
    pub name: String,
    /// Type tags, ordered; the first entry is the primary type.
    pub types: Vec<String>,
    /// Height in decimetres, as reported upstream.
    pub height: u32,
    /// Weight in hectograms, as reported upstream.
    pub weight: u32,
    /// Base stat values in upstream order.
    pub stats: Vec<StatValue>,
    /// Image URLs in preferred-first order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl CatalogItem {
    /// Returns the primary type tag, if any.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Returns the preferred image URL, if any.
    pub fn best_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Looks up a stat value by kind.
    pub fn stat(&self, kind: &StatKind) -> Option<u32> {
        self.stats.iter().find(|s| &s.name == kind).map(|s| s.value)
    }

    /// Sum of all base stat values.
    pub fn stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.value).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> CatalogItem {
        CatalogItem {
            id: 25,
            name: "pikachu".to_string(),
            types: vec!["electric".to_string()],
            height: 4,
            weight: 60,
            stats: vec![
                StatValue {
                    name: StatKind::Hp,
                    value: 35,
                },
                StatValue {
                    name: StatKind::Speed,
                    value: 90,
                },
            ],
            images: vec![
                "https://example.test/art/25.png".to_string(),
                "https://example.test/sprite/25.png".to_string(),
            ],
        }
    }

    #[test]
    fn test_primary_type() {
        let item = sample_item();
        assert_eq!(item.primary_type(), Some("electric"));

        let untyped = CatalogItem {
            types: Vec::new(),
            ..sample_item()
        };
        assert_eq!(untyped.primary_type(), None);
    }

    #[test]
    fn test_best_image_prefers_first() {
        let item = sample_item();
        assert_eq!(item.best_image(), Some("https://example.test/art/25.png"));
    }

    #[test]
    fn test_stat_lookup() {
        let item = sample_item();
        assert_eq!(item.stat(&StatKind::Speed), Some(90));
        assert_eq!(item.stat(&StatKind::Defense), None);
        assert_eq!(item.stat_total(), 125);
    }

    #[test]
    fn test_stat_kind_from_name() {
        assert_eq!(StatKind::from_name("hp"), StatKind::Hp);
        assert_eq!(StatKind::from_name("special-attack"), StatKind::SpecialAttack);
        assert_eq!(
            StatKind::from_name("evasion"),
            StatKind::Other("evasion".to_string())
        );
    }

    #[test]
    fn test_stat_kind_labels() {
        assert_eq!(StatKind::Hp.label(), "HP");
        assert_eq!(StatKind::SpecialDefense.label(), "Sp. Def");
        assert_eq!(StatKind::Other("evasion".to_string()).label(), "evasion");
    }
}
