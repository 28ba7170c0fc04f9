//! Home page rows shown while the category filter is "all"

use std::cmp::Reverse;

use crate::catalog::Catalog;
use crate::config::PortalConfig;
use crate::model::{Badge, Game};
use crate::selector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    Carousel,
    Grid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSection {
    pub id: &'static str,
    pub title: String,
    pub layout: SectionLayout,
    pub games: Vec<Game>,
    /// Path of the page listing everything in this row
    pub view_all: Option<String>,
}

fn section(
    id: &'static str,
    title: &str,
    layout: SectionLayout,
    games: Vec<&Game>,
    view_all: Option<&str>,
) -> GameSection {
    GameSection {
        id,
        title: title.to_string(),
        layout,
        games: games.into_iter().cloned().collect(),
        view_all: view_all.map(str::to_string),
    }
}

/// Build the home page rows. Rows with no games are left out.
pub fn home_sections(catalog: &Catalog, config: &PortalConfig) -> Vec<GameSection> {
    let mut trending: Vec<&Game> = catalog
        .games()
        .iter()
        .filter(|g| g.has_badge(Badge::Updated) || g.has_badge(Badge::Hot))
        .collect();
    trending.sort_by_key(|g| Reverse(g.plays));

    let sections = vec![
        section(
            "top-picks",
            "🔥 Top Picks",
            SectionLayout::Carousel,
            selector::popular(catalog, config.featured_games_count),
            Some("/top"),
        ),
        section(
            "new-games",
            "✨ New Games",
            SectionLayout::Carousel,
            selector::with_badge(catalog, Badge::New),
            Some("/new"),
        ),
        section(
            "featured",
            "⭐ Featured Games",
            SectionLayout::Grid,
            selector::with_badge(catalog, Badge::Hot),
            None,
        ),
        section(
            "action",
            "💥 Action Games",
            SectionLayout::Carousel,
            catalog.games_by_category("action"),
            Some("/categories?c=action"),
        ),
        section(
            "puzzle",
            "🧩 Puzzle Games",
            SectionLayout::Carousel,
            catalog.games_by_category("puzzle"),
            Some("/categories?c=puzzle"),
        ),
        section(
            "trending",
            "📈 Trending Now",
            SectionLayout::Carousel,
            trending,
            Some("/top"),
        ),
    ];

    sections.into_iter().filter(|s| !s.games.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::abc_catalog;

    #[test]
    fn test_empty_rows_are_dropped() {
        let sections = home_sections(&abc_catalog(), &PortalConfig::default());
        let ids: Vec<&str> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["top-picks", "new-games", "featured", "action", "puzzle", "trending"]);

        let empty = home_sections(&Catalog::default(), &PortalConfig::default());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_top_picks_respects_featured_count() {
        let config = PortalConfig {
            featured_games_count: 2,
            ..PortalConfig::default()
        };
        let sections = home_sections(&abc_catalog(), &config);
        let top: Vec<&str> = sections[0].games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(top, vec!["b", "a"]);
    }

    #[test]
    fn test_trending_ordered_by_plays() {
        let catalog = Catalog::embedded().unwrap();
        let sections = home_sections(&catalog, &PortalConfig::default());
        let trending = sections.iter().find(|s| s.id == "trending").unwrap();
        assert!(trending.games.windows(2).all(|w| w[0].plays >= w[1].plays));
        assert!(trending
            .games
            .iter()
            .all(|g| g.has_badge(Badge::Hot) || g.has_badge(Badge::Updated)));
    }
}
