//! Text output formatting with stat bars and type colors.

use chrono::{DateTime, Utc};

use dexterm_core::{CatalogItem, FavoriteRecord, TypeKind};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";

// Progress bar characters
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// Highest base stat value the bar scale assumes.
const STAT_BAR_MAX: u32 = 255;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
    bar_width: usize,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            bar_width: 20,
        }
    }

    // ========================================================================
    // Catalog listing
    // ========================================================================

    /// Formats one listing row: id, name, type chips, favorite marker.
    pub fn format_item_row(&self, item: &CatalogItem, is_favorite: bool) -> String {
        let marker = if is_favorite {
            format!(" {}", self.red("\u{2665}"))
        } else {
            String::new()
        };

        format!(
            "{} {:<14} {}{}",
            self.dim(&format!("#{:04}", item.id)),
            item.name,
            self.format_type_chips(&item.types),
            marker
        )
    }

    /// Formats the full detail view for one item.
    pub fn format_detail(&self, item: &CatalogItem, is_favorite: bool) -> String {
        let mut lines = Vec::new();

        let marker = if is_favorite {
            format!(" {}", self.red("\u{2665}"))
        } else {
            String::new()
        };
        lines.push(format!(
            "{} {}{}",
            self.bold(&capitalize(&item.name)),
            self.dim(&format!("#{:04}", item.id)),
            marker
        ));
        lines.push(self.format_type_chips(&item.types));
        lines.push(format!(
            "Height: {:.1} m   Weight: {:.1} kg",
            f64::from(item.height) / 10.0,
            f64::from(item.weight) / 10.0
        ));

        if !item.stats.is_empty() {
            lines.push(String::new());
            for stat in &item.stats {
                lines.push(format!(
                    "{:<8} {:>3} {}",
                    stat.name.label(),
                    stat.value,
                    self.bar(stat.value)
                ));
            }
            lines.push(format!(
                "{:<8} {:>3}",
                "Total",
                item.stat_total()
            ));
        }

        if let Some(image) = item.best_image() {
            lines.push(String::new());
            lines.push(format!("Image: {}", self.dim(image)));
        }

        lines.join("\n")
    }

    /// Formats one favorites row with a relative date.
    pub fn format_favorite_row(&self, record: &FavoriteRecord) -> String {
        format!(
            "{} {:<14} {}",
            self.dim(&format!("#{:04}", record.id)),
            record.name,
            self.dim(&format_relative_date(record.date_added))
        )
    }

    /// Formats a type name as a colored chip.
    pub fn format_type_chip(&self, name: &str) -> String {
        let chip = format!("[{name}]");
        if !self.use_colors {
            return chip;
        }
        match hex_to_rgb(TypeKind::color_for(name)) {
            Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{chip}{RESET}"),
            None => chip,
        }
    }

    fn format_type_chips(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|n| self.format_type_chip(n))
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Renders a stat bar scaled to the 0..=255 stat range.
    fn bar(&self, value: u32) -> String {
        let filled =
            (value.min(STAT_BAR_MAX) as usize * self.bar_width).div_ceil(STAT_BAR_MAX as usize);
        let mut bar = String::with_capacity(self.bar_width);
        for i in 0..self.bar_width {
            bar.push(if i < filled { BAR_FULL } else { BAR_EMPTY });
        }
        bar
    }

    fn bold(&self, s: &str) -> String {
        self.wrap(s, BOLD)
    }

    fn dim(&self, s: &str) -> String {
        self.wrap(s, DIM)
    }

    fn red(&self, s: &str) -> String {
        self.wrap(s, RED)
    }

    fn wrap(&self, s: &str, code: &str) -> String {
        if self.use_colors {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// Uppercases the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Formats a timestamp the way the original favorites page did:
/// "today", "yesterday", "N days ago", then a plain date.
pub fn format_relative_date(date: DateTime<Utc>) -> String {
    let days = (Utc::now() - date).num_days();
    match days {
        i64::MIN..=0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

/// Parses a `#RRGGBB` color into components.
fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
