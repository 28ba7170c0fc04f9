//! Category tiles with per-category game lists

use std::sync::Arc;

use leptos::prelude::*;
use gameverse_core::model::ALL_SLUG;
use gameverse_core::{Catalog, ListController, ListMode, Selection};
use crate::components::GameGrid;

#[component]
pub fn CategoriesPage(
    catalog: Arc<Catalog>,
    /// Category preselected through `?c=`
    selected: Option<String>,
) -> impl IntoView {
    let initial = Selection::category(selected.unwrap_or_else(|| ALL_SLUG.to_string()));
    let controller = RwSignal::new(ListController::with_selection(
        catalog.clone(),
        ListMode::Browse,
        initial,
    ));

    let tiles: Vec<_> = catalog
        .category_counts()
        .into_iter()
        .map(|(category, count)| (category.clone(), count))
        .collect();

    view! {
        <div class="page-body">
            <div class="page-header">
                <h1 class="page-title">"Game Categories"</h1>
                <p class="page-subtitle">"Browse games by category and find your next favorite"</p>
            </div>
            {move || {
                if controller.with(|c| c.selection().is_default()) {
                    view! {
                        <div class="category-tiles">
                            {tiles.iter().cloned().map(|(category, count)| {
                                let slug = category.slug.clone();
                                view! {
                                    <button
                                        class="category-tile"
                                        on:click=move |_| controller.update(|c| {
                                            c.select(Selection::category(slug.clone()))
                                        })
                                    >
                                        <div class="tile-icon">{category.icon_or_default().to_string()}</div>
                                        <h3 class="tile-name">{category.name.clone()}</h3>
                                        <p class="tile-count">{format!("{} games", count)}</p>
                                    </button>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                } else {
                    let (title, games) = controller.with(|c| {
                        let icon = c
                            .catalog()
                            .category(c.active_slug())
                            .map(|cat| cat.icon_or_default().to_string())
                            .unwrap_or_else(|| "🎮".to_string());
                        let name = c.catalog().category_name(c.active_slug()).to_string();
                        (format!("{} {}", icon, name), c.current_results())
                    });
                    let empty = games.is_empty();
                    view! {
                        <button
                            class="back-button"
                            on:click=move |_| controller.update(|c| c.reset())
                        >
                            "← Back to Categories"
                        </button>
                        <GameGrid title=title games=games />
                        {empty.then(|| view! {
                            <div class="empty-state">
                                <p>"No games found in this category yet."</p>
                                <button
                                    class="link-button"
                                    on:click=move |_| controller.update(|c| c.reset())
                                >
                                    "Browse other categories →"
                                </button>
                            </div>
                        })}
                    }.into_any()
                }
            }}
        </div>
    }
}
