//! Full notification center

use chrono::Utc;
use leptos::prelude::*;
use gameverse_core::notifications::{NotificationCenter, NotificationFilter};

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let center = RwSignal::new(NotificationCenter::seed(Utc::now()));

    let tab = move |filter: NotificationFilter, label: &'static str| {
        view! {
            <button
                class="tab-btn"
                class:active=move || center.with(|c| c.filter() == filter)
                on:click=move |_| center.update(|c| c.set_filter(filter))
            >
                {label}
                {(filter == NotificationFilter::Unread).then(|| view! {
                    <span class="tab-count">{move || center.with(|c| c.unread_count())}</span>
                })}
            </button>
        }
    };

    view! {
        <div class="page-body notifications-page">
            <div class="page-header">
                <h1 class="page-title">
                    "🔔 Notifications"
                    {move || {
                        let unread = center.with(|c| c.unread_count());
                        (unread > 0).then(|| view! {
                            <span class="unread-pill">{format!("{} new", unread)}</span>
                        })
                    }}
                </h1>
                <div class="header-buttons">
                    <button
                        class="btn-secondary"
                        disabled=move || center.with(|c| c.unread_count() == 0)
                        on:click=move |_| center.update(|c| c.mark_all_read())
                    >
                        "✓ Mark all as read"
                    </button>
                    <button
                        class="btn-danger"
                        disabled=move || center.with(|c| c.is_empty())
                        on:click=move |_| center.update(|c| c.clear_all())
                    >
                        "🗑 Clear all"
                    </button>
                </div>
            </div>

            <div class="tab-bar">
                {tab(NotificationFilter::All, "All")}
                {tab(NotificationFilter::Unread, "Unread")}
            </div>

            {move || {
                let now = Utc::now();
                let items = center.with(|c| c.visible());
                if items.is_empty() {
                    let unread_only = center.with(|c| c.filter() == NotificationFilter::Unread);
                    return view! {
                        <div class="empty-state">
                            <div class="empty-icon">"🔕"</div>
                            <h2>"No notifications"</h2>
                            <p>
                                {if unread_only {
                                    "You're all caught up!"
                                } else {
                                    "You don't have any notifications yet."
                                }}
                            </p>
                        </div>
                    }.into_any();
                }
                view! {
                    <ul class="notification-list">
                        {items.into_iter().map(|item| {
                            let id = item.id;
                            let unread = !item.read;
                            let age = item.age_label(now);
                            view! {
                                <li class=format!("notification-item {}", item.kind.css_class()) class:unread=unread>
                                    <span class="notification-icon">{item.kind.icon()}</span>
                                    <div class="notification-body">
                                        <h3>{item.title}</h3>
                                        <p>{item.message}</p>
                                        <span class="notification-time">{age}</span>
                                    </div>
                                    <div class="notification-actions">
                                        {unread.then(|| view! {
                                            <button
                                                class="icon-btn"
                                                title="Mark as read"
                                                on:click=move |_| center.update(|c| {
                                                    c.mark_read(id);
                                                })
                                            >
                                                "✓"
                                            </button>
                                        })}
                                        <button
                                            class="icon-btn danger"
                                            title="Delete"
                                            on:click=move |_| center.update(|c| {
                                                c.delete(id);
                                            })
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
