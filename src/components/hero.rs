use leptos::prelude::*;
use crate::location::{navigate, Route};

#[component]
pub fn HeroSection(
    site_name: String,
    description: String,
    set_route: WriteSignal<Route>,
) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    "Welcome to "<span class="hero-brand">{site_name}</span>
                </h1>
                <p class="hero-subtitle">{description}</p>
                <div class="hero-actions">
                    <button
                        class="btn-primary"
                        on:click=move |_| navigate(set_route, Route::Top)
                    >
                        "Play Now"
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| navigate(set_route, Route::Categories(None))
                    >
                        "Browse Categories"
                    </button>
                </div>
            </div>
        </section>
    }
}
