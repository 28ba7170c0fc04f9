//! Admin console: login gate, moderation tables and site settings

use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use gameverse_core::admin::{AdminConsole, AdminTab, GameStatus, NewGame, SiteToggle, UserStatus};
use gameverse_core::auth::{AdminSession, Authenticator, Credentials, StaticCredentials};
use gameverse_core::AuthError;
use gameverse_core::model::format_count;
use gameverse_core::{Catalog, PortalConfig};
use crate::components::NavLink;
use crate::location::Route;

/// How long the "Settings saved" notice stays up
const SAVED_NOTICE_MS: u32 = 2500;

#[component]
pub fn AdminPage(
    catalog: Arc<Catalog>,
    config: PortalConfig,
    set_route: WriteSignal<Route>,
) -> impl IntoView {
    let session = RwSignal::new(AdminSession::new());
    let authenticator = StaticCredentials::new(config.admin.clone());
    let console = RwSignal::new(AdminConsole::from_catalog(&catalog, &config));
    let categories = AdminConsole::category_options(&catalog);

    view! {
        <Show
            when=move || session.with(|s| s.is_authenticated())
            fallback=move || view! { <AdminLogin session=session authenticator=authenticator.clone() /> }
        >
            <AdminConsoleView
                session=session
                console=console
                categories=categories.clone()
                set_route=set_route
            />
        </Show>
    }
}

/// Sign in through `session`. A session signal that is already gone counts
/// as a failed login.
fn sign_in(
    session: RwSignal<AdminSession>,
    authenticator: &dyn Authenticator,
    credentials: &Credentials,
) -> Result<(), AuthError> {
    session
        .try_update(|s| s.login(authenticator, credentials).map(|_| ()))
        .unwrap_or(Err(AuthError::InvalidCredentials))
}

#[component]
fn AdminLogin(session: RwSignal<AdminSession>, authenticator: StaticCredentials) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(username.get(), password.get());
        match sign_in(session, &authenticator, &credentials) {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="admin-login">
            <form class="auth-card" on:submit=on_submit>
                <div class="admin-lock">"🔐"</div>
                <h1 class="auth-title">"Admin Login"</h1>
                <p class="muted">"Enter your credentials to access the admin panel"</p>
                <label>
                    "Username"
                    <input
                        type="text"
                        placeholder="Enter username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <div class="password-field">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="icon-btn"
                            title="Show password"
                            on:click=move |_| set_show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                </label>
                {move || error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <button type="submit" class="btn-primary full-width">"Login"</button>
            </form>
        </div>
    }
}

#[component]
fn AdminConsoleView(
    session: RwSignal<AdminSession>,
    console: RwSignal<AdminConsole>,
    categories: Vec<String>,
    set_route: WriteSignal<Route>,
) -> impl IntoView {
    let (adding, set_adding) = signal(false);
    let admin_name = move || {
        session.with(|s| s.identity().map(|i| i.username.clone()).unwrap_or_default())
    };

    let body = move || match console.with(|c| c.tab()) {
        AdminTab::Overview => view! { <OverviewTab console=console /> }.into_any(),
        AdminTab::Games => view! { <GamesTab console=console set_adding=set_adding /> }.into_any(),
        AdminTab::Users => view! { <UsersTab console=console /> }.into_any(),
        AdminTab::Settings => view! { <SettingsTab console=console /> }.into_any(),
    };

    view! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <div class="admin-brand">"🎮 Admin"</div>
                <nav>
                    {AdminTab::all().iter().copied().map(|tab| view! {
                        <button
                            class="admin-nav-btn"
                            class:active=move || console.with(|c| c.tab() == tab)
                            on:click=move |_| console.update(|c| c.set_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }).collect::<Vec<_>>()}
                </nav>
                <div class="admin-sidebar-footer">
                    <NavLink route=Route::Home set_route=set_route class="admin-nav-btn">
                        "🌐 View Site"
                    </NavLink>
                    <button
                        class="admin-nav-btn"
                        on:click=move |_| {
                            tracing::info!("admin signed out");
                            session.update(|s| s.logout());
                        }
                    >
                        "🚪 Logout"
                    </button>
                </div>
            </aside>
            <main class="admin-main">
                <header class="admin-header">
                    <h1>{move || console.with(|c| c.tab().label())}</h1>
                    <span class="muted">{move || format!("Signed in as {}", admin_name())}</span>
                </header>
                {body}
            </main>
            <Show when=move || adding.get()>
                <AddGameModal console=console categories=categories.clone() set_adding=set_adding />
            </Show>
        </div>
    }
}

#[component]
fn OverviewTab(console: RwSignal<AdminConsole>) -> impl IntoView {
    let stats = console.with_untracked(|c| c.stats());
    let top = console.with_untracked(|c| {
        let mut games = c.games().to_vec();
        games.sort_by_key(|g| std::cmp::Reverse(g.plays));
        games.truncate(5);
        games
    });

    view! {
        <div class="stat-row">
            <div class="stat-card">
                <span class="stat-value">{stats.total_games}</span>
                <span class="stat-label">"Total Games"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{stats.active_games}</span>
                <span class="stat-label">"Active Games"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{format_count(stats.total_plays)}</span>
                <span class="stat-label">"Total Plays"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{format!("{} / {}", stats.active_users, stats.total_users)}</span>
                <span class="stat-label">"Active Users"</span>
            </div>
        </div>
        <div class="dashboard-card">
            <h2>"Most Played"</h2>
            <ul class="recent-list">
                {top.into_iter().map(|game| view! {
                    <li class="recent-item">
                        <div>
                            <h3>{game.title}</h3>
                            <p>{game.category}</p>
                        </div>
                        <span class="high-score">{format_count(game.plays)}</span>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
fn GamesTab(console: RwSignal<AdminConsole>, set_adding: WriteSignal<bool>) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    // Ids come from the table itself, so a miss only means a stale row
    let toggle_status = move |id: u32| {
        console.update(|c| {
            if let Err(e) = c.toggle_status(id) {
                tracing::warn!("{}", e);
            }
        })
    };
    let toggle_featured = move |id: u32| {
        console.update(|c| {
            if let Err(e) = c.toggle_featured(id) {
                tracing::warn!("{}", e);
            }
        })
    };

    view! {
        <div class="table-toolbar">
            <input
                type="search"
                placeholder="Search games..."
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button class="btn-primary" on:click=move |_| set_adding.set(true)>"+ Add Game"</button>
        </div>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Category"</th>
                    <th>"Plays"</th>
                    <th>"Status"</th>
                    <th>"Featured"</th>
                </tr>
            </thead>
            <tbody>
                {move || console.with(|c| c.filtered_games(&term.get())).into_iter().map(|game| {
                    let id = game.id;
                    let active = game.status == GameStatus::Active;
                    view! {
                        <tr>
                            <td>{game.title}</td>
                            <td>{game.category}</td>
                            <td>{format_count(game.plays)}</td>
                            <td>
                                <button
                                    class=format!("status-pill {}", game.status.as_str())
                                    on:click=move |_| toggle_status(id)
                                >
                                    {if active { "Active" } else { "Inactive" }}
                                </button>
                            </td>
                            <td>
                                <button
                                    class="icon-btn"
                                    class:featured=game.featured
                                    on:click=move |_| toggle_featured(id)
                                >
                                    {if game.featured { "★" } else { "☆" }}
                                </button>
                            </td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn UsersTab(console: RwSignal<AdminConsole>) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    view! {
        <div class="table-toolbar">
            <input
                type="search"
                placeholder="Search users..."
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
        </div>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Username"</th>
                    <th>"Email"</th>
                    <th>"Joined"</th>
                    <th>"Plays"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {move || console.with(|c| c.filtered_users(&term.get())).into_iter().map(|user| view! {
                    <tr>
                        <td>{user.username}</td>
                        <td>{user.email}</td>
                        <td>{user.joined.format("%b %-d, %Y").to_string()}</td>
                        <td>{user.plays}</td>
                        <td>
                            <span class=format!("status-pill {}", user.status.as_str())>
                                {match user.status {
                                    UserStatus::Active => "Active",
                                    UserStatus::Banned => "Banned",
                                }}
                            </span>
                        </td>
                    </tr>
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn SettingsTab(console: RwSignal<AdminConsole>) -> impl IntoView {
    let (saved, set_saved) = signal(false);

    let on_save = move |_| {
        let settings = console.with(|c| c.settings().clone());
        tracing::info!(?settings, "site settings saved");
        set_saved.set(true);
        Timeout::new(SAVED_NOTICE_MS, move || set_saved.set(false)).forget();
    };

    view! {
        <div class="settings-form">
            <label>
                "Site Name"
                <input
                    type="text"
                    prop:value=move || console.with(|c| c.settings().site_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        console.update(|c| c.settings_mut().site_name = value);
                    }
                />
            </label>
            <label>
                "Site Description"
                <textarea
                    prop:value=move || console.with(|c| c.settings().site_description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        console.update(|c| c.settings_mut().site_description = value);
                    }
                ></textarea>
            </label>
            <label>
                "Games Per Page"
                <input
                    type="number"
                    min="1"
                    prop:value=move || console.with(|c| c.settings().max_games_per_page.to_string())
                    on:input=move |ev| {
                        if let Ok(n) = event_target_value(&ev).parse::<usize>() {
                            console.update(|c| c.settings_mut().max_games_per_page = n);
                        }
                    }
                />
            </label>
            <label>
                "Featured Games"
                <input
                    type="number"
                    min="0"
                    prop:value=move || console.with(|c| c.settings().featured_games_count.to_string())
                    on:input=move |ev| {
                        if let Ok(n) = event_target_value(&ev).parse::<usize>() {
                            console.update(|c| c.settings_mut().featured_games_count = n);
                        }
                    }
                />
            </label>

            <div class="toggle-list">
                {SiteToggle::all().iter().copied().map(|toggle| view! {
                    <div class="toggle-row">
                        <span>{toggle.label()}</span>
                        <button
                            type="button"
                            class="toggle-switch"
                            class:on=move || console.with(|c| toggle.get(c.settings()))
                            on:click=move |_| console.update(|c| c.toggle_setting(toggle))
                        >
                            <span class="toggle-knob"></span>
                        </button>
                    </div>
                }).collect::<Vec<_>>()}
            </div>

            <div class="settings-actions">
                <button class="btn-primary" on:click=on_save>"Save Settings"</button>
                <Show when=move || saved.get()>
                    <span class="saved-notice">"✓ Settings saved"</span>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn AddGameModal(
    console: RwSignal<AdminConsole>,
    categories: Vec<String>,
    set_adding: WriteSignal<bool>,
) -> impl IntoView {
    let draft = RwSignal::new(NewGame::default());
    let (error, set_error) = signal(None::<String>);

    let close = move || {
        draft.set(NewGame::default());
        set_error.set(None);
        set_adding.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let game = draft.get();
        let result = console
            .try_update(|c| c.add_game(game))
            .unwrap_or(Ok(0));
        match result {
            Ok(_) => close(),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <form
                class="modal"
                on:click=|ev| ev.stop_propagation()
                on:submit=on_submit
            >
                <h2>"Add New Game"</h2>
                <label>
                    "Title"
                    <input
                        type="text"
                        placeholder="Game title"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.title = value);
                        }
                    />
                </label>
                <label>
                    "Category"
                    <select
                        prop:value=move || draft.with(|d| d.category.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.category = value);
                        }
                    >
                        {categories.into_iter().map(|name| view! {
                            <option value=name.clone()>{name.clone()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </label>
                <label>
                    "Initial Plays"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || draft.with(|d| d.plays.to_string())
                        on:input=move |ev| {
                            let plays = event_target_value(&ev).parse().unwrap_or(0);
                            draft.update(|d| d.plays = plays);
                        }
                    />
                </label>
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.featured)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            draft.update(|d| d.featured = checked);
                        }
                    />
                    "Featured"
                </label>
                {move || error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">"Add Game"</button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameverse_core::config::AdminCredentials;

    #[test]
    fn test_sign_in() {
        let auth = StaticCredentials::new(AdminCredentials::default());
        let session = RwSignal::new(AdminSession::new());

        assert_eq!(
            sign_in(session, &auth, &Credentials::new("superadmin", "wrong")),
            Err(AuthError::InvalidCredentials)
        );
        assert!(!session.with_untracked(|s| s.is_authenticated()));

        assert_eq!(sign_in(session, &auth, &Credentials::new("superadmin", "Admin@123")), Ok(()));
        assert!(session.with_untracked(|s| s.is_authenticated()));
    }

    #[test]
    fn test_sign_in_without_session_fails() {
        let auth = StaticCredentials::new(AdminCredentials::default());
        let session = RwSignal::new(AdminSession::new());
        session.dispose();

        assert_eq!(
            sign_in(session, &auth, &Credentials::new("superadmin", "Admin@123")),
            Err(AuthError::InvalidCredentials)
        );
    }
}
