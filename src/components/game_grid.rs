//! Game cards laid out in a responsive grid

use leptos::prelude::*;
use gameverse_core::Game;

#[component]
pub fn GameGrid(
    #[prop(optional, into)]
    title: String,
    games: Vec<Game>,
) -> impl IntoView {
    view! {
        <section class="game-section">
            {(!title.is_empty()).then(|| view! {
                <h2 class="section-title">{title.clone()}</h2>
            })}
            <div class="game-grid">
                {games.into_iter().enumerate().map(|(index, game)| view! {
                    <div
                        class="game-grid-item fade-in"
                        style:animation-delay=format!("{}ms", index * 100)
                    >
                        <GameCard game=game />
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    let title = game.title.clone();
    let title_for_click = game.title.clone();
    let thumbnail = game.thumbnail.clone();
    let rating = format!("{:.1}", game.rating);
    let plays = game.plays_label();
    let description = game.description.clone();

    view! {
        <div
            class="game-card"
            title=description.unwrap_or_default()
            on:click=move |_| {
                // No game pages yet; record the click
                let name = title_for_click.as_str();
                tracing::info!(game = name, "Game clicked");
            }
        >
            <div class="game-thumb">
                <img src=thumbnail alt=title.clone() class="thumb-image" loading="lazy" />
                <div class="badge-row">
                    {game.badges.iter().map(|badge| view! {
                        <span class=format!("badge badge-{}", badge.as_str())>{badge.label()}</span>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="play-overlay">"▶"</div>
            </div>
            <div class="game-info">
                <h3 class="game-title">{title}</h3>
                <div class="game-meta">
                    <span class="game-rating">"★ "{rating}</span>
                    <span class="game-plays">{plays}" plays"</span>
                </div>
            </div>
        </div>
    }
}
