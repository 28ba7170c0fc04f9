//! Search results for the `?q=` parameter

use std::sync::Arc;

use leptos::prelude::*;
use gameverse_core::{Catalog, ListController, ListMode, Selection};
use crate::components::GameGrid;
use crate::location::{navigate, Route};

#[component]
pub fn SearchPage(
    catalog: Arc<Catalog>,
    query: String,
    set_route: WriteSignal<Route>,
) -> impl IntoView {
    let controller = RwSignal::new(ListController::with_selection(
        catalog,
        ListMode::Search,
        Selection::search(query.clone()),
    ));
    // Refine box starts with the incoming query
    let (refine, set_refine) = signal(query);

    let on_refine = move |ev| {
        let value = event_target_value(&ev);
        set_refine.set(value.clone());
        controller.update(|c| c.select(Selection::search(value)));
    };

    view! {
        <div class="page-body">
            <div class="page-header">
                <h1 class="page-title">"🔍 Search Results"</h1>
                <input
                    type="search"
                    class="refine-input"
                    placeholder="Refine your search..."
                    prop:value=move || refine.get()
                    on:input=on_refine
                />
                {move || {
                    let q = refine.get();
                    let count = controller.with(|c| c.current_results().len());
                    (!q.trim().is_empty()).then(|| view! {
                        <p class="page-subtitle">
                            {format!(
                                "{} {} found for \"{}\"",
                                count,
                                if count == 1 { "game" } else { "games" },
                                q
                            )}
                        </p>
                    })
                }}
            </div>
            {move || {
                let results = controller.with(|c| c.current_results());
                let q = refine.get();
                if !results.is_empty() {
                    view! { <GameGrid games=results /> }.into_any()
                } else if !q.trim().is_empty() {
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">"🎮"</div>
                            <h2>"No games found"</h2>
                            <p>{format!("We couldn't find any games matching \"{}\"", q)}</p>
                            <button
                                class="btn-primary"
                                on:click=move |_| navigate(set_route, Route::Home)
                            >
                                "Browse All Games"
                            </button>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">"🔍"</div>
                            <h2>"Start searching"</h2>
                            <p>"Enter a game name or category to find games"</p>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
