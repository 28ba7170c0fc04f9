//! Derived game lists
//!
//! Pure functions from a catalog and a parameter to an ordered list of games.
//! None of them mutate the catalog; no match is an empty vector.

use std::cmp::Reverse;

use crate::catalog::Catalog;
use crate::model::{Badge, Game};

/// Maximum number of games on the "top games" view
pub const TOP_GAMES_LIMIT: usize = 12;

/// Which derivation to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Games in a category; "all" means the full catalog
    Category(String),
    /// Case-insensitive substring search over title and category
    Search(String),
    /// Most played first, capped at `limit` and never more than
    /// [`TOP_GAMES_LIMIT`]
    Popular { limit: usize },
    /// Games carrying a badge
    Badge(Badge),
}

impl Filter {
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Game> {
        match self {
            Filter::Category(slug) => catalog.games_by_category(slug),
            Filter::Search(query) => search(catalog, query),
            Filter::Popular { limit } => popular(catalog, *limit),
            Filter::Badge(badge) => with_badge(catalog, *badge),
        }
    }
}

/// Games whose title or category contains `query`, ignoring case.
///
/// Surrounding whitespace is trimmed. A blank query means no search was
/// performed and returns nothing rather than everything.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Game> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let results: Vec<&Game> = catalog
        .games()
        .iter()
        .filter(|g| {
            g.title.to_lowercase().contains(&needle)
                || g.category.to_lowercase().contains(&needle)
                || catalog
                    .category_name(&g.category)
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect();
    tracing::debug!(query = %needle, hits = results.len(), "search");
    results
}

/// Whole catalog by descending play count, ties kept in catalog order.
///
/// At most `limit` games, and never more than [`TOP_GAMES_LIMIT`] whatever
/// the caller asks for.
pub fn popular(catalog: &Catalog, limit: usize) -> Vec<&Game> {
    let mut games: Vec<&Game> = catalog.games().iter().collect();
    // sort_by_key is stable
    games.sort_by_key(|g| Reverse(g.plays));
    games.truncate(limit.min(TOP_GAMES_LIMIT));
    games
}

pub fn with_badge(catalog: &Catalog, badge: Badge) -> Vec<&Game> {
    catalog.games().iter().filter(|g| g.has_badge(badge)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{abc_catalog, category, game};

    fn ids(games: &[&Game]) -> Vec<String> {
        games.iter().map(|g| g.id.clone()).collect()
    }

    #[test]
    fn test_popular_scenario() {
        let catalog = abc_catalog();
        assert_eq!(ids(&popular(&catalog, TOP_GAMES_LIMIT)), vec!["b", "a", "c"]);
        assert_eq!(ids(&popular(&catalog, 2)), vec!["b", "a"]);
    }

    #[test]
    fn test_popular_is_capped_and_non_increasing() {
        let catalog = Catalog::embedded().unwrap();
        let top = popular(&catalog, TOP_GAMES_LIMIT);
        assert!(top.len() <= TOP_GAMES_LIMIT);
        assert!(top.windows(2).all(|w| w[0].plays >= w[1].plays));
    }

    #[test]
    fn test_popular_never_exceeds_top_limit() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.len() > TOP_GAMES_LIMIT);

        let config = crate::PortalConfig::from_json(r#"{ "top_games_limit": 20 }"#).unwrap();
        let top = popular(&catalog, config.top_games_limit);
        assert_eq!(top.len(), TOP_GAMES_LIMIT);
        assert_eq!(Filter::Popular { limit: usize::MAX }.apply(&catalog).len(), TOP_GAMES_LIMIT);

        // Smaller limits still apply
        assert_eq!(popular(&catalog, 6).len(), 6);
    }

    #[test]
    fn test_popular_ties_keep_catalog_order() {
        let catalog = Catalog::new(
            vec![category("action", "Action")],
            vec![
                game("x", "X", "action", 10, &[]),
                game("y", "Y", "action", 50, &[]),
                game("z", "Z", "action", 10, &[]),
            ],
        )
        .unwrap();
        assert_eq!(ids(&popular(&catalog, 12)), vec!["y", "x", "z"]);
    }

    #[test]
    fn test_search_scenario() {
        // Titles: "Alpha Strike", "Block Drop", "Cave Run"; categories action/puzzle.
        // "a" hits Alpha Strike (title), Cave Run (title) and both action games
        // by category; Block Drop has no "a" in title and "puzzle" has none either.
        let catalog = abc_catalog();
        assert_eq!(ids(&search(&catalog, "a")), vec!["a", "c"]);
        assert_eq!(ids(&search(&catalog, "  PUZZLE ")), vec!["b"]);
        assert_eq!(ids(&search(&catalog, "drop")), vec!["b"]);
    }

    #[test]
    fn test_blank_search_is_empty() {
        let catalog = abc_catalog();
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "   \t ").is_empty());
    }

    #[test]
    fn test_search_hits_contain_query() {
        let catalog = Catalog::embedded().unwrap();
        for query in ["run", "Puz", "RPG", "zz", "e"] {
            let needle = query.to_lowercase();
            for g in search(&catalog, query) {
                let name = catalog.category_name(&g.category).to_lowercase();
                assert!(
                    g.title.to_lowercase().contains(&needle) || name.contains(&needle),
                    "{} does not match {}",
                    g.title,
                    query
                );
            }
        }
    }

    #[test]
    fn test_search_matches_category_display_name() {
        let catalog = Catalog::new(
            vec![category("fps", "First Person")],
            vec![game("f", "Gun Range", "fps", 1, &[])],
        )
        .unwrap();
        assert_eq!(ids(&search(&catalog, "person")), vec!["f"]);
    }

    #[test]
    fn test_badge_filter() {
        let catalog = abc_catalog();
        assert_eq!(ids(&with_badge(&catalog, Badge::New)), vec!["b", "c"]);
        assert!(with_badge(&catalog, Badge::Top).is_empty());

        let embedded = Catalog::embedded().unwrap();
        for g in with_badge(&embedded, Badge::Updated) {
            assert!(g.has_badge(Badge::Updated));
        }
    }

    #[test]
    fn test_filter_dispatch() {
        let catalog = abc_catalog();
        assert_eq!(
            ids(&Filter::Category("action".into()).apply(&catalog)),
            vec!["a", "c"]
        );
        assert_eq!(ids(&Filter::Popular { limit: 1 }.apply(&catalog)), vec!["b"]);
        assert_eq!(ids(&Filter::Badge(Badge::Hot).apply(&catalog)), vec!["a"]);
        assert!(Filter::Search(" ".into()).apply(&catalog).is_empty());
    }
}
