//! Fixed listing pages: top, new and multiplayer

use std::sync::Arc;

use leptos::prelude::*;
use gameverse_core::model::{Badge, Game};
use gameverse_core::{selector, Catalog};
use crate::components::GameGrid;

fn owned(games: Vec<&Game>) -> Vec<Game> {
    games.into_iter().cloned().collect()
}

#[component]
fn ListingPage(
    title: &'static str,
    subtitle: &'static str,
    empty_message: &'static str,
    games: Vec<Game>,
) -> impl IntoView {
    let empty = games.is_empty();

    view! {
        <div class="page-body">
            <div class="page-header">
                <h1 class="page-title">{title}</h1>
                <p class="page-subtitle">{subtitle}</p>
            </div>
            <GameGrid games=games />
            {empty.then(|| view! {
                <div class="empty-state">
                    <p>{empty_message}</p>
                </div>
            })}
        </div>
    }
}

#[component]
pub fn TopPage(catalog: Arc<Catalog>, limit: usize) -> impl IntoView {
    let games = owned(selector::popular(&catalog, limit));

    view! {
        <ListingPage
            title="🏆 Top Games"
            subtitle="The most popular games played by millions"
            empty_message="No games to rank yet."
            games=games
        />
    }
}

#[component]
pub fn NewGamesPage(catalog: Arc<Catalog>) -> impl IntoView {
    let games = owned(selector::with_badge(&catalog, Badge::New));

    view! {
        <ListingPage
            title="✨ New Games"
            subtitle="Check out the latest games added to our collection"
            empty_message="No new games at the moment. Check back soon!"
            games=games
        />
    }
}

#[component]
pub fn MultiplayerPage(catalog: Arc<Catalog>) -> impl IntoView {
    let games = owned(catalog.games_by_category("multiplayer"));

    view! {
        <ListingPage
            title="👥 Multiplayer Games"
            subtitle="Play with friends and compete against players worldwide"
            empty_message="No multiplayer games available yet."
            games=games
        />
    }
}
