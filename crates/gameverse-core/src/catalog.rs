//! Catalog store
//!
//! The full set of games and categories, validated once at startup and
//! read-only afterwards. Share it behind an `Arc`.

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::CatalogError;
use crate::model::{is_url_safe_slug, Category, Game, ALL_SLUG};

/// Dataset compiled into the crate
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

const MAX_RATING: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Always starts with the synthetic "all" entry
    categories: Vec<Category>,
    games: Vec<Game>,
}

/// On-disk layout of the catalog JSON
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
    games: Vec<Game>,
}

impl Default for Catalog {
    /// An empty catalog that still offers the "all" category
    fn default() -> Self {
        Self {
            categories: vec![Category::all()],
            games: Vec::new(),
        }
    }
}

impl Catalog {
    /// Build a catalog, checking every record invariant.
    ///
    /// The "all" category is inserted at the front when the input omits it.
    pub fn new(categories: Vec<Category>, games: Vec<Game>) -> Result<Self, CatalogError> {
        let mut ordered = Vec::with_capacity(categories.len() + 1);
        if !categories.iter().any(Category::is_all) {
            ordered.push(Category::all());
        }
        ordered.extend(categories);
        // Keep "all" first even if the input listed it later
        if let Some(pos) = ordered.iter().position(Category::is_all) {
            let all = ordered.remove(pos);
            ordered.insert(0, all);
        }

        let mut slugs = HashSet::new();
        for category in &ordered {
            if !is_url_safe_slug(&category.slug) {
                return Err(CatalogError::InvalidSlug(category.slug.clone()));
            }
            if !slugs.insert(category.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(category.slug.clone()));
            }
        }

        let mut ids = HashSet::new();
        for game in &games {
            if !ids.insert(game.id.as_str()) {
                return Err(CatalogError::DuplicateGameId(game.id.clone()));
            }
            if game.category == ALL_SLUG || !slugs.contains(game.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    game: game.id.clone(),
                    category: game.category.clone(),
                });
            }
            if !(0.0..=MAX_RATING).contains(&game.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    game: game.id.clone(),
                    rating: game.rating,
                });
            }
            let mut seen = HashSet::new();
            if let Some(badge) = game.badges.iter().find(|b| !seen.insert(**b)) {
                return Err(CatalogError::DuplicateBadge {
                    game: game.id.clone(),
                    badge: badge.to_string(),
                });
            }
        }

        Ok(Self {
            categories: ordered,
            games,
        })
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let catalog = Self::new(file.categories, file.games)?;
        tracing::info!(
            games = catalog.games.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load the dataset shipped with the crate
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Every game, in catalog order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Games in the given category, in catalog order.
    ///
    /// `"all"` returns the whole catalog; an unknown slug yields nothing.
    pub fn games_by_category(&self, slug: &str) -> Vec<&Game> {
        if slug == ALL_SLUG {
            return self.games.iter().collect();
        }
        self.games.iter().filter(|g| g.category == slug).collect()
    }

    /// Categories in display order, "all" first
    pub fn all_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories excluding the synthetic "all" entry
    pub fn real_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.is_all())
    }

    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Display name for a slug, or the slug itself when unknown
    pub fn category_name<'a>(&'a self, slug: &'a str) -> &'a str {
        self.category(slug).map(|c| c.name.as_str()).unwrap_or(slug)
    }

    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Number of games per real category, in category order
    pub fn category_counts(&self) -> Vec<(&Category, usize)> {
        self.real_categories()
            .map(|c| (c, self.games.iter().filter(|g| g.category == c.slug).count()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::Badge;

    pub(crate) fn category(slug: &str, name: &str) -> Category {
        Category {
            id: slug.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            icon: None,
        }
    }

    pub(crate) fn game(id: &str, title: &str, category: &str, plays: u64, badges: &[Badge]) -> Game {
        Game {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail: format!("https://example.test/{}.png", id),
            badges: badges.to_vec(),
            category: category.to_string(),
            plays,
            rating: 4.0,
            description: None,
        }
    }

    /// Three-game catalog: A (action, 500), B (puzzle, 900), C (action, 100)
    pub(crate) fn abc_catalog() -> Catalog {
        Catalog::new(
            vec![category("action", "Action"), category("puzzle", "Puzzle")],
            vec![
                game("a", "Alpha Strike", "action", 500, &[Badge::Hot]),
                game("b", "Block Drop", "puzzle", 900, &[Badge::New]),
                game("c", "Cave Run", "action", 100, &[Badge::New, Badge::Updated]),
            ],
        )
        .unwrap()
    }

    fn ids(games: &[&Game]) -> Vec<String> {
        games.iter().map(|g| g.id.clone()).collect()
    }

    #[test]
    fn test_games_by_category_scenario() {
        let catalog = abc_catalog();
        assert_eq!(ids(&catalog.games_by_category("action")), vec!["a", "c"]);
        assert_eq!(ids(&catalog.games_by_category("puzzle")), vec!["b"]);
    }

    #[test]
    fn test_all_returns_full_catalog_in_order() {
        let catalog = Catalog::embedded().unwrap();
        let all = catalog.games_by_category(ALL_SLUG);
        assert_eq!(all.len(), catalog.games().len());
        for (returned, original) in all.iter().zip(catalog.games()) {
            assert_eq!(returned.id, original.id);
        }
    }

    #[test]
    fn test_unknown_slug_is_empty() {
        let catalog = abc_catalog();
        assert!(catalog.games_by_category("racing").is_empty());
        assert!(catalog.games_by_category("").is_empty());
    }

    #[test]
    fn test_every_category_filter_matches_slug() {
        let catalog = Catalog::embedded().unwrap();
        for category in catalog.real_categories() {
            for game in catalog.games_by_category(&category.slug) {
                assert_eq!(game.category, category.slug);
            }
        }
    }

    #[test]
    fn test_all_category_is_first() {
        let catalog = abc_catalog();
        let slugs: Vec<&str> = catalog.all_categories().iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["all", "action", "puzzle"]);

        let reordered = Catalog::new(
            vec![category("action", "Action"), Category::all()],
            Vec::new(),
        )
        .unwrap();
        assert!(reordered.all_categories()[0].is_all());
        assert_eq!(reordered.all_categories().len(), 2);
    }

    #[test]
    fn test_rejects_duplicate_game_id() {
        let err = Catalog::new(
            vec![category("action", "Action")],
            vec![
                game("a", "One", "action", 1, &[]),
                game("a", "Two", "action", 2, &[]),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateGameId(id) if id == "a"));
    }

    #[test]
    fn test_rejects_unknown_or_reserved_category() {
        let err = Catalog::new(
            vec![category("action", "Action")],
            vec![game("a", "One", "racing", 1, &[])],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));

        let err = Catalog::new(
            vec![category("action", "Action")],
            vec![game("a", "One", ALL_SLUG, 1, &[])],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
    }

    #[test]
    fn test_rejects_bad_slugs_and_ratings() {
        let err = Catalog::new(
            vec![category("action", "Action"), category("action", "Again")],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(_)));

        let err = Catalog::new(vec![category("Big Games", "Big")], Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSlug(_)));

        let mut bad = game("a", "One", "action", 1, &[]);
        bad.rating = 7.5;
        let err = Catalog::new(vec![category("action", "Action")], vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::RatingOutOfRange { .. }));
    }

    #[test]
    fn test_rejects_repeated_badge() {
        let err = Catalog::new(
            vec![category("action", "Action")],
            vec![game("a", "One", "action", 1, &[Badge::Hot, Badge::Hot])],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateBadge { .. }));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_lookups() {
        let catalog = abc_catalog();
        assert_eq!(catalog.category_name("puzzle"), "Puzzle");
        assert_eq!(catalog.category_name("mystery"), "mystery");
        assert_eq!(catalog.game("b").map(|g| g.title.as_str()), Some("Block Drop"));
        assert!(catalog.game("z").is_none());

        let counts: Vec<(&str, usize)> = catalog
            .category_counts()
            .into_iter()
            .map(|(c, n)| (c.slug.as_str(), n))
            .collect();
        assert_eq!(counts, vec![("action", 2), ("puzzle", 1)]);
    }

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.real_categories().count(), 11);
    }
}
