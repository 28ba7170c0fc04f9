//! Landing page: hero, category chips and the home rows

use std::sync::Arc;

use leptos::prelude::*;
use gameverse_core::sections::{home_sections, SectionLayout};
use gameverse_core::{Catalog, ListController, ListMode, PortalConfig, Selection};
use crate::components::{CategoryFilter, GameCarousel, GameGrid, HeroSection};
use crate::location::Route;

#[component]
pub fn HomePage(
    catalog: Arc<Catalog>,
    config: PortalConfig,
    set_route: WriteSignal<Route>,
) -> impl IntoView {
    let controller = RwSignal::new(ListController::new(catalog.clone(), ListMode::Browse));
    let sections = home_sections(&catalog, &config);
    let categories = catalog.all_categories().to_vec();

    let active = Signal::derive(move || controller.with(|c| c.active_slug().to_string()));
    let on_change = move |slug: String| {
        controller.update(|c| c.select(Selection::category(slug)));
    };

    view! {
        <HeroSection
            site_name=config.site_name.clone()
            description=config.site_description.clone()
            set_route=set_route
        />
        <CategoryFilter categories=categories active=active on_change=on_change />
        <div class="page-body">
            {move || {
                if controller.with(|c| c.selection().is_default()) {
                    let rows = sections.iter().cloned().map(|section| match section.layout {
                        SectionLayout::Grid => view! {
                            <GameGrid title=section.title.clone() games=section.games.clone() />
                        }.into_any(),
                        SectionLayout::Carousel => view! {
                            <GameCarousel section=section set_route=set_route />
                        }.into_any(),
                    }).collect::<Vec<_>>();
                    view! { <>{rows}</> }.into_any()
                } else {
                    let (title, games) = controller.with(|c| {
                        (c.catalog().category_name(c.active_slug()).to_string(), c.current_results())
                    });
                    let empty = games.is_empty();
                    view! {
                        <GameGrid title=title games=games />
                        {empty.then(|| view! {
                            <div class="empty-state">
                                <p>"No games found in this category."</p>
                                <button
                                    class="link-button"
                                    on:click=move |_| controller.update(|c| c.reset())
                                >
                                    "View all games →"
                                </button>
                            </div>
                        })}
                    }.into_any()
                }
            }}
        </div>
    }
}
