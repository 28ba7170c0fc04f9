//! Player dashboard

use leptos::prelude::*;
use gameverse_core::dashboard::{Dashboard, DashboardTab, PlayRecord};
use gameverse_core::model::format_count;
use crate::location::{navigate, Route};

/// Rows on the overview's "Recently Played" card
const RECENT_COUNT: usize = 4;

fn stars(rating: u8) -> String {
    (1..=5u8).map(|i| if i <= rating { '★' } else { '☆' }).collect()
}

fn short_date(record: &PlayRecord) -> String {
    record.last_played.format("%b %-d").to_string()
}

#[component]
pub fn DashboardPage(set_route: WriteSignal<Route>) -> impl IntoView {
    let dashboard = RwSignal::new(Dashboard::demo());
    let profile = dashboard.with_untracked(|d| d.profile().clone());
    let xp_width = format!("{:.1}%", dashboard.with_untracked(|d| d.xp_percentage()));
    let total_plays = dashboard.with_untracked(|d| d.total_plays());
    let initial = profile.username.chars().next().unwrap_or('?');

    let overview = move || {
        let recent = dashboard.with(|d| d.recent(RECENT_COUNT));
        view! {
            <div class="dashboard-card">
                <h2>"Recently Played"</h2>
                <ul class="recent-list">
                    {recent.into_iter().map(|record| {
                        let date = short_date(&record);
                        view! {
                            <li class="recent-item">
                                <img src=record.thumbnail.clone() alt=record.title.clone() />
                                <div>
                                    <h3>{record.title}</h3>
                                    <p>{format!("{} • {}", record.category, date)}</p>
                                </div>
                                <span class="high-score">{format_count(record.high_score)}</span>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
        }
    };

    let games = move || {
        let history = dashboard.with(|d| d.history().to_vec());
        view! {
            <div class="dashboard-card">
                <h2>"My Games"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Game"</th>
                            <th>"Plays"</th>
                            <th>"Time"</th>
                            <th>"High Score"</th>
                            <th>"Rating"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {history.into_iter().map(|record| view! {
                            <tr>
                                <td>
                                    <strong>{record.title.clone()}</strong>
                                    <span class="muted">{record.category.clone()}</span>
                                </td>
                                <td>{record.play_count}</td>
                                <td>{format!("{:.1}h", record.total_play_time)}</td>
                                <td>{format_count(record.high_score)}</td>
                                <td class="stars">{stars(record.rating)}</td>
                            </tr>
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        }
    };

    let achievements = move || view! {
        <div class="dashboard-card empty-state">
            <div class="empty-icon">"🏆"</div>
            <h2>"Achievements coming soon"</h2>
            <p>"Keep playing to unlock badges and rewards."</p>
            <button class="btn-primary" on:click=move |_| navigate(set_route, Route::Home)>
                "Find Games"
            </button>
        </div>
    };

    view! {
        <div class="page-body dashboard-page">
            <section class="profile-card">
                <div class="avatar">{initial.to_string()}</div>
                <div class="profile-info">
                    <h1>{profile.username.clone()}</h1>
                    <p class="muted">{profile.email.clone()}</p>
                    <p class="muted">
                        {format!("Member since {}", profile.join_date.format("%B %Y"))}
                    </p>
                    <div class="level-row">
                        <span class="level-badge">{format!("Level {}", profile.level)}</span>
                        <div class="xp-bar">
                            <div class="xp-fill" style:width=xp_width></div>
                        </div>
                        <span class="muted">
                            {format!("{} / {} XP", profile.xp, profile.xp_to_next_level)}
                        </span>
                    </div>
                </div>
                <button
                    class="btn-secondary"
                    on:click=move |_| {
                        tracing::info!("player signed out");
                        navigate(set_route, Route::Home);
                    }
                >
                    "Logout"
                </button>
            </section>

            <section class="stat-row">
                <div class="stat-card">
                    <span class="stat-value">{total_plays}</span>
                    <span class="stat-label">"Games Played"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{format!("{}h", profile.total_play_time)}</span>
                    <span class="stat-label">"Play Time"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{profile.achievements}</span>
                    <span class="stat-label">"Achievements"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{profile.favorite_genre.clone()}</span>
                    <span class="stat-label">"Favorite Genre"</span>
                </div>
            </section>

            <div class="tab-bar">
                {DashboardTab::all().iter().copied().map(|tab| view! {
                    <button
                        class="tab-btn"
                        class:active=move || dashboard.with(|d| d.tab() == tab)
                        on:click=move |_| dashboard.update(|d| d.set_tab(tab))
                    >
                        {tab.label()}
                    </button>
                }).collect::<Vec<_>>()}
            </div>

            {move || match dashboard.with(|d| d.tab()) {
                DashboardTab::Overview => overview().into_any(),
                DashboardTab::Games => games().into_any(),
                DashboardTab::Achievements => achievements().into_any(),
            }}
        </div>
    }
}
