//! Persisted favorite records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::item::CatalogItem;

/// A favorited catalog item summary, persisted locally.
///
/// The JSON field names match what the original application wrote to
/// device storage, so an existing favorites file keeps working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Catalog identifier; unique within the favorites collection.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// One representative image URL (may be empty).
    #[serde(default)]
    pub image: String,
    /// When the favorite was added.
    #[serde(rename = "dateAdded", deserialize_with = "deserialize_lenient_date")]
    pub date_added: DateTime<Utc>,
}

impl FavoriteRecord {
    /// Builds a record for an item, stamped with the current time.
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            image: item.best_image().unwrap_or_default().to_string(),
            date_added: Utc::now(),
        }
    }
}

/// Accepts both RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
///
/// The persisted format was never versioned and older files carry
/// date-only strings.
fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(serde::de::Error::custom(format!(
        "unrecognized date format: {raw}"
    )))
}

// ============================================================================
// Tests
// ============================================================================
