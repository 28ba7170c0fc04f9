//! Top navigation bar with search and the notification bell

use std::mem::discriminant;

use chrono::Utc;
use leptos::prelude::*;
use gameverse_core::notifications::NotificationCenter;
use crate::location::{navigate, Route};
use super::NavLink;

/// Notifications listed in the bell dropdown
const BELL_PREVIEW: usize = 4;

fn nav_links() -> Vec<(&'static str, Route)> {
    vec![
        ("Home", Route::Home),
        ("Categories", Route::Categories(None)),
        ("New Games", Route::New),
        ("Top Games", Route::Top),
        ("Multiplayer", Route::Multiplayer),
    ]
}

/// Same page, ignoring parameters
fn same_page(a: &Route, b: &Route) -> bool {
    discriminant(a) == discriminant(b)
}

#[component]
pub fn Header(
    site_name: String,
    route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (search_query, set_search_query) = signal(String::new());
    let (bell_open, set_bell_open) = signal(false);
    // The bell keeps its own feed, separate from the notifications page
    let notifications = RwSignal::new(NotificationCenter::seed(Utc::now()));

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = search_query.get().trim().to_string();
        if !query.is_empty() {
            set_search_query.set(String::new());
            set_menu_open.set(false);
            navigate(set_route, Route::Search(query));
        }
    };

    let nav = move |class: &'static str| {
        nav_links().into_iter().map(|(label, target)| {
            let for_active = target.clone();
            view! {
                <span
                    class="nav-item"
                    class:active=move || same_page(&route.get(), &for_active)
                    on:click=move |_| set_menu_open.set(false)
                >
                    <NavLink route=target set_route=set_route class=class>
                        {label}
                    </NavLink>
                </span>
            }
        }).collect::<Vec<_>>()
    };

    view! {
        <header class="site-header">
            <div class="header-inner">
                <NavLink route=Route::Home set_route=set_route class="logo">
                    <span class="logo-mark">"🎮"</span>
                    <span class="logo-text">{site_name}</span>
                </NavLink>

                <nav class="desktop-nav">{nav("nav-link")}</nav>

                <form class="search-form" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search games..."
                        prop:value=move || search_query.get()
                        on:input=move |ev| set_search_query.set(event_target_value(&ev))
                    />
                    <button type="submit" class="search-submit" title="Search">"🔍"</button>
                </form>

                <div class="header-actions">
                    <div class="bell-wrapper">
                        <button
                            class="bell-btn"
                            title="Notifications"
                            on:click=move |_| set_bell_open.update(|open| *open = !*open)
                        >
                            "🔔"
                            {move || {
                                let unread = notifications.with(|n| n.unread_count());
                                (unread > 0).then(|| view! {
                                    <span class="bell-count">{unread}</span>
                                })
                            }}
                        </button>
                        <Show when=move || bell_open.get()>
                            <div class="bell-dropdown">
                                <div class="bell-dropdown-header">
                                    <h3>"Notifications"</h3>
                                    <button
                                        class="link-button"
                                        on:click=move |_| notifications.update(|n| n.mark_all_read())
                                    >
                                        "Mark all as read"
                                    </button>
                                </div>
                                <ul class="bell-list">
                                    {move || {
                                        let now = Utc::now();
                                        notifications.with(|n| n.all().iter().take(BELL_PREVIEW).cloned().collect::<Vec<_>>())
                                            .into_iter()
                                            .map(|item| {
                                                let id = item.id;
                                                let age = item.age_label(now);
                                                view! {
                                                    <li
                                                        class="bell-item"
                                                        class:unread=!item.read
                                                        on:click=move |_| notifications.update(|n| {
                                                            n.mark_read(id);
                                                        })
                                                    >
                                                        <span class="bell-icon">{item.kind.icon()}</span>
                                                        <div class="bell-text">
                                                            <p class="bell-title">{item.title}</p>
                                                            <p class="bell-time">{age}</p>
                                                        </div>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </ul>
                                <div on:click=move |_| set_bell_open.set(false)>
                                    <NavLink route=Route::Notifications set_route=set_route class="bell-view-all">
                                        "View all notifications"
                                    </NavLink>
                                </div>
                            </div>
                        </Show>
                    </div>
                    <NavLink route=Route::SignIn set_route=set_route class="btn-primary sign-in">
                        "Sign In"
                    </NavLink>
                    <button
                        class="menu-toggle"
                        title="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    <form class="search-form mobile" on:submit=on_search>
                        <input
                            type="search"
                            placeholder="Search games..."
                            prop:value=move || search_query.get()
                            on:input=move |ev| set_search_query.set(event_target_value(&ev))
                        />
                    </form>
                    <nav class="mobile-nav">{nav("mobile-nav-link")}</nav>
                </div>
            </Show>
        </header>
    }
}
