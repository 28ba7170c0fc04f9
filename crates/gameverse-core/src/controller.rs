//! Per-page list state
//!
//! A [`ListController`] belongs to one page instance. It holds the current
//! selection and re-derives the visible games on every read.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::model::{Game, ALL_SLUG};
use crate::selector;

/// What the user has picked on this page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing picked yet, or picked "reset"
    #[default]
    Default,
    Category(String),
    Search(String),
}

impl Selection {
    /// Interpret a category slug, mapping "all" back to the default
    pub fn category(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        if slug == ALL_SLUG {
            Selection::Default
        } else {
            Selection::Category(slug)
        }
    }

    /// Interpret a search box value, mapping blank input to the default
    pub fn search(query: impl Into<String>) -> Self {
        let query = query.into();
        if query.trim().is_empty() {
            Selection::Default
        } else {
            Selection::Search(query)
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Selection::Default)
    }
}

/// What [`Selection::Default`] shows on a given page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Category browsing: default is the whole catalog
    Browse,
    /// Search results: default is "no search performed", i.e. nothing
    Search,
}

#[derive(Debug, Clone)]
pub struct ListController {
    catalog: Arc<Catalog>,
    mode: ListMode,
    selection: Selection,
}

impl ListController {
    pub fn new(catalog: Arc<Catalog>, mode: ListMode) -> Self {
        Self {
            catalog,
            mode,
            selection: Selection::Default,
        }
    }

    /// Controller pre-seeded with a selection, e.g. a `?q=` parameter
    pub fn with_selection(catalog: Arc<Catalog>, mode: ListMode, selection: Selection) -> Self {
        let mut controller = Self::new(catalog, mode);
        controller.select(selection);
        controller
    }

    /// Replace the selection; the next read sees it
    pub fn select(&mut self, selection: Selection) {
        tracing::debug!(?selection, mode = ?self.mode, "list selection changed");
        self.selection = selection;
    }

    pub fn reset(&mut self) {
        self.select(Selection::Default);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    /// Active category slug, "all" when nothing specific is selected
    pub fn active_slug(&self) -> &str {
        match &self.selection {
            Selection::Category(slug) => slug,
            _ => ALL_SLUG,
        }
    }

    /// Current search text, empty when not searching
    pub fn query(&self) -> &str {
        match &self.selection {
            Selection::Search(q) => q,
            _ => "",
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Derive the visible games from the current selection
    pub fn current_results(&self) -> Vec<Game> {
        let games = match (&self.selection, self.mode) {
            (Selection::Category(slug), _) => self.catalog.games_by_category(slug),
            (Selection::Search(query), _) => selector::search(&self.catalog, query),
            (Selection::Default, ListMode::Browse) => self.catalog.games_by_category(ALL_SLUG),
            (Selection::Default, ListMode::Search) => Vec::new(),
        };
        games.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::abc_catalog;

    fn ids(games: &[Game]) -> Vec<String> {
        games.iter().map(|g| g.id.clone()).collect()
    }

    fn browse() -> ListController {
        ListController::new(Arc::new(abc_catalog()), ListMode::Browse)
    }

    #[test]
    fn test_default_browse_shows_everything() {
        let controller = browse();
        assert!(controller.selection().is_default());
        assert_eq!(ids(&controller.current_results()), vec!["a", "b", "c"]);
        assert_eq!(controller.active_slug(), "all");
    }

    #[test]
    fn test_select_is_visible_immediately() {
        let mut controller = browse();
        controller.select(Selection::category("puzzle"));
        assert_eq!(ids(&controller.current_results()), vec!["b"]);
        controller.select(Selection::category("action"));
        assert_eq!(ids(&controller.current_results()), vec!["a", "c"]);
    }

    #[test]
    fn test_selecting_all_restores_full_catalog() {
        let mut controller = browse();
        controller.select(Selection::category("puzzle"));
        controller.select(Selection::category("all"));
        assert!(controller.selection().is_default());
        assert_eq!(ids(&controller.current_results()), vec!["a", "b", "c"]);

        controller.select(Selection::Category("puzzle".into()));
        controller.reset();
        assert_eq!(ids(&controller.current_results()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_search_mode_default_is_empty() {
        let catalog = Arc::new(abc_catalog());
        let mut controller = ListController::new(catalog.clone(), ListMode::Search);
        assert!(controller.current_results().is_empty());

        controller.select(Selection::search("cave"));
        assert_eq!(ids(&controller.current_results()), vec!["c"]);
        assert_eq!(controller.query(), "cave");

        controller.select(Selection::search("   "));
        assert!(controller.selection().is_default());
        assert!(controller.current_results().is_empty());
    }

    #[test]
    fn test_with_selection_seeds_state() {
        let controller = ListController::with_selection(
            Arc::new(abc_catalog()),
            ListMode::Search,
            Selection::search("alpha"),
        );
        assert_eq!(ids(&controller.current_results()), vec!["a"]);
    }

    #[test]
    fn test_unknown_category_is_empty_not_error() {
        let mut controller = browse();
        controller.select(Selection::category("racing"));
        assert!(controller.current_results().is_empty());
        assert_eq!(controller.active_slug(), "racing");
    }
}
