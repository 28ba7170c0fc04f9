use chrono::{Datelike, Utc};
use leptos::prelude::*;
use crate::location::Route;
use super::NavLink;

#[component]
pub fn Footer(site_name: String, set_route: WriteSignal<Route>) -> impl IntoView {
    let year = Utc::now().year();
    // Stamped by build.rs
    let build = format!("Build {} ({})", env!("BUILD_HASH"), env!("BUILD_TIMESTAMP"));

    let links = vec![
        ("New Games", Route::New),
        ("Top Games", Route::Top),
        ("Categories", Route::Categories(None)),
        ("Multiplayer", Route::Multiplayer),
    ];

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="logo-mark">"🎮"</span>
                    <span class="logo-text">{site_name.clone()}</span>
                    <p class="footer-tagline">"Play the best free online games, right in your browser."</p>
                </div>
                <nav class="footer-links">
                    <h4>"Games"</h4>
                    {links.into_iter().map(|(label, route)| view! {
                        <NavLink route=route set_route=set_route class="footer-link">{label}</NavLink>
                    }).collect::<Vec<_>>()}
                </nav>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, site_name)}</p>
                <p class="build-info">{build}</p>
            </div>
        </footer>
    }
}
