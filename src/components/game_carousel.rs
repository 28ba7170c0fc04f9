//! Scrollable row of game cards used on the home page

use leptos::prelude::*;
use leptos::html;
use gameverse_core::sections::GameSection;
use crate::location::Route;
use super::{GameCard, NavLink};

/// Pixels moved by the arrow buttons
const SCROLL_STEP: f64 = 600.0;

#[component]
pub fn GameCarousel(
    section: GameSection,
    set_route: WriteSignal<Route>,
) -> impl IntoView {
    let track_ref = NodeRef::<html::Div>::new();

    let scroll_by = move |dx: f64| {
        if let Some(track) = track_ref.get() {
            track.scroll_by_with_x_and_y(dx, 0.0);
        }
    };

    view! {
        <section class="game-carousel">
            <div class="carousel-header">
                <h2 class="section-title">{section.title.clone()}</h2>
                <div class="carousel-controls">
                    {section.view_all.as_deref().map(|href| view! {
                        <NavLink
                            route=Route::from_href(href)
                            set_route=set_route
                            class="view-all"
                        >
                            "View all →"
                        </NavLink>
                    })}
                    <button class="carousel-arrow" title="Scroll left" on:click=move |_| scroll_by(-SCROLL_STEP)>
                        "‹"
                    </button>
                    <button class="carousel-arrow" title="Scroll right" on:click=move |_| scroll_by(SCROLL_STEP)>
                        "›"
                    </button>
                </div>
            </div>
            <div class="carousel-track" node_ref=track_ref>
                {section.games.into_iter().map(|game| view! {
                    <div class="carousel-item">
                        <GameCard game=game />
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
