//! Game and category records
//!
//! These mirror the JSON layout of the embedded catalog so they can be
//! deserialized directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved category slug meaning "no filter"
pub const ALL_SLUG: &str = "all";

/// Promotional tag attached to a game card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Hot,
    Top,
    New,
    Updated,
}

impl Badge {
    /// All badges in display order
    pub fn all() -> &'static [Badge] {
        &[Badge::Hot, Badge::Top, Badge::New, Badge::Updated]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Hot => "hot",
            Badge::Top => "top",
            Badge::New => "new",
            Badge::Updated => "updated",
        }
    }

    /// Text shown on the card ribbon
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Hot => "HOT",
            Badge::Top => "TOP",
            Badge::New => "NEW",
            Badge::Updated => "UPDATED",
        }
    }

    /// Parse from the lowercase tag name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "hot" => Some(Badge::Hot),
            "top" => Some(Badge::Top),
            "new" => Some(Badge::New),
            "updated" => Some(Badge::Updated),
            _ => None,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A playable game in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// Slug of the owning category
    pub category: String,
    pub plays: u64,
    pub rating: f32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Game {
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }

    /// Play count formatted the way cards show it (1.2K, 3.4M)
    pub fn plays_label(&self) -> String {
        format_count(self.plays)
    }
}

/// A browsable category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Category {
    /// The synthetic "All Games" entry used as the default filter
    pub fn all() -> Self {
        Self {
            id: "0".to_string(),
            name: "All Games".to_string(),
            slug: ALL_SLUG.to_string(),
            icon: Some("🎮".to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        self.slug == ALL_SLUG
    }

    /// Icon glyph, falling back to a controller
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or("🎮")
    }
}

/// Slugs must be non-empty lowercase ASCII with digits and dashes
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Compact count: 950, 1.2K, 3.4M
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_roundtrip() {
        for badge in Badge::all() {
            assert_eq!(Badge::from_str(badge.as_str()), Some(*badge));
        }
        assert_eq!(Badge::from_str("legendary"), None);
    }

    #[test]
    fn test_badge_deserializes_lowercase() {
        let badges: Vec<Badge> = serde_json::from_str(r#"["hot","updated"]"#).unwrap();
        assert_eq!(badges, vec![Badge::Hot, Badge::Updated]);
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_url_safe_slug("action"));
        assert!(is_url_safe_slug("tower-defense-2"));
        assert!(!is_url_safe_slug(""));
        assert!(!is_url_safe_slug("Action"));
        assert!(!is_url_safe_slug("two words"));
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(1_240), "1.2K");
        assert_eq!(format_count(3_400_000), "3.4M");
    }
}
