use std::sync::Arc;

use leptos::prelude::*;
use gameverse_core::{Catalog, PortalConfig};
use crate::components::{Header, Footer};
use crate::location::{self, Route};
use crate::pages::{
    AdminPage, CategoriesPage, DashboardPage, HomePage, MultiplayerPage, NewGamesPage,
    NotificationsPage, SearchPage, SignInPage, TopPage,
};

#[component]
pub fn App(catalog: Arc<Catalog>, config: PortalConfig) -> impl IntoView {
    // Current page, seeded from the address bar
    let (route, set_route) = signal(location::current());

    // Keep in step with back/forward navigation
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        set_route.set(location::current());
    });

    let site_name = config.site_name.clone();
    let footer_name = config.site_name.clone();

    // Every navigation mounts a fresh page, so page state never outlives it
    let page = move || {
        let catalog = catalog.clone();
        let config = config.clone();
        match route.get() {
            Route::Home => view! {
                <HomePage catalog=catalog config=config set_route=set_route />
            }.into_any(),
            Route::Categories(selected) => view! {
                <CategoriesPage catalog=catalog selected=selected />
            }.into_any(),
            Route::Top => view! {
                <TopPage catalog=catalog limit=config.top_games_limit />
            }.into_any(),
            Route::New => view! { <NewGamesPage catalog=catalog /> }.into_any(),
            Route::Multiplayer => view! { <MultiplayerPage catalog=catalog /> }.into_any(),
            Route::Search(query) => view! {
                <SearchPage catalog=catalog query=query set_route=set_route />
            }.into_any(),
            Route::Notifications => view! { <NotificationsPage /> }.into_any(),
            Route::Dashboard => view! {
                <DashboardPage set_route=set_route />
            }.into_any(),
            Route::SignIn => view! { <SignInPage set_route=set_route /> }.into_any(),
            Route::Admin => view! {
                <AdminPage catalog=catalog config=config set_route=set_route />
            }.into_any(),
        }
    };

    view! {
        <div class="app-container">
            {move || (!route.get().is_standalone()).then(|| view! {
                <Header site_name=site_name.clone() route=route set_route=set_route />
            })}
            <main class="page-content">
                {page}
            </main>
            {move || (!route.get().is_standalone()).then(|| view! {
                <Footer site_name=footer_name.clone() set_route=set_route />
            })}
        </div>
    }
}
