//! The fixed enumeration of known type tags.
//!
//! The original application kept a string-keyed color table; here the
//! known types are a compile-time enumeration. Items still carry their
//! type tags as plain strings (the upstream API may grow new ones), and
//! presentation code resolves them through [`TypeKind::from_name`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default color for type tags outside the known set.
pub const DEFAULT_TYPE_COLOR: &str = "#68A090";

/// The eighteen type tags the upstream catalog currently uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Normal type.
    Normal,
    /// Fire type.
    Fire,
    /// Water type.
    Water,
    /// Electric type.
    Electric,
    /// Grass type.
    Grass,
    /// Ice type.
    Ice,
    /// Fighting type.
    Fighting,
    /// Poison type.
    Poison,
    /// Ground type.
    Ground,
    /// Flying type.
    Flying,
    /// Psychic type.
    Psychic,
    /// Bug type.
    Bug,
    /// Rock type.
    Rock,
    /// Ghost type.
    Ghost,
    /// Dragon type.
    Dragon,
    /// Dark type.
    Dark,
    /// Steel type.
    Steel,
    /// Fairy type.
    Fairy,
}

impl TypeKind {
    /// Returns the lowercase tag name as used by the upstream API.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Electric => "electric",
            Self::Grass => "grass",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }

    /// Returns the hex display color for this type.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Normal => "#A8A878",
            Self::Fire => "#F08030",
            Self::Water => "#6890F0",
            Self::Electric => "#F8D030",
            Self::Grass => "#78C850",
            Self::Ice => "#98D8D8",
            Self::Fighting => "#C03028",
            Self::Poison => "#A040A0",
            Self::Ground => "#E0C068",
            Self::Flying => "#A890F0",
            Self::Psychic => "#F85888",
            Self::Bug => "#A8B820",
            Self::Rock => "#B8A038",
            Self::Ghost => "#705898",
            Self::Dragon => "#7038F8",
            Self::Dark => "#705848",
            Self::Steel => "#B8B8D0",
            Self::Fairy => "#EE99AC",
        }
    }

    /// Parses a tag name; unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|t| t.name() == name).copied()
    }

    /// Resolves the display color for an arbitrary tag name, falling
    /// back to [`DEFAULT_TYPE_COLOR`] for unrecognized names.
    pub fn color_for(name: &str) -> &'static str {
        Self::from_name(name).map_or(DEFAULT_TYPE_COLOR, |t| t.color_hex())
    }

    /// Returns all known type kinds.
    pub fn all() -> &'static [TypeKind] {
        &[
            Self::Normal,
            Self::Fire,
            Self::Water,
            Self::Electric,
            Self::Grass,
            Self::Ice,
            Self::Fighting,
            Self::Poison,
            Self::Ground,
            Self::Flying,
            Self::Psychic,
            Self::Bug,
            Self::Rock,
            Self::Ghost,
            Self::Dragon,
            Self::Dark,
            Self::Steel,
            Self::Fairy,
        ]
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_types() {
        assert_eq!(TypeKind::from_name("fire"), Some(TypeKind::Fire));
        assert_eq!(TypeKind::from_name("fairy"), Some(TypeKind::Fairy));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(TypeKind::from_name("shadow"), None);
        assert_eq!(TypeKind::from_name(""), None);
        assert_eq!(TypeKind::from_name("Fire"), None);
    }

    #[test]
    fn test_color_for_falls_back_to_default() {
        assert_eq!(TypeKind::color_for("electric"), "#F8D030");
        assert_eq!(TypeKind::color_for("shadow"), DEFAULT_TYPE_COLOR);
    }

    #[test]
    fn test_name_round_trips_for_all() {
        for kind in TypeKind::all() {
            assert_eq!(TypeKind::from_name(kind.name()), Some(*kind));
        }
    }
}
