//! Page routes and browser history

use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Every page the portal can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Category tiles, or one category's games
    Categories(Option<String>),
    Top,
    New,
    Multiplayer,
    Search(String),
    Notifications,
    Dashboard,
    SignIn,
    Admin,
}

impl Route {
    /// Parse a pathname plus query string (with or without the leading `?`)
    pub fn parse(path: &str, search: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/categories" => Route::Categories(query_param(search, "c").filter(|c| !c.is_empty())),
            "/top" => Route::Top,
            "/new" => Route::New,
            "/multiplayer" => Route::Multiplayer,
            "/search" => Route::Search(query_param(search, "q").unwrap_or_default()),
            "/notifications" => Route::Notifications,
            "/dashboard" => Route::Dashboard,
            "/signin" => Route::SignIn,
            "/admin" | "/admin/dashboard" => Route::Admin,
            _ => Route::Home,
        }
    }

    /// Parse an href such as `/search?q=neon`
    pub fn from_href(href: &str) -> Self {
        match href.split_once('?') {
            Some((path, search)) => Self::parse(path, search),
            None => Self::parse(href, ""),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Categories(None) => "/categories".to_string(),
            Route::Categories(Some(slug)) => format!("/categories?c={}", urlencoding::encode(slug)),
            Route::Top => "/top".to_string(),
            Route::New => "/new".to_string(),
            Route::Multiplayer => "/multiplayer".to_string(),
            Route::Search(q) => format!("/search?q={}", urlencoding::encode(q)),
            Route::Notifications => "/notifications".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::Admin => "/admin".to_string(),
        }
    }

    /// Pages rendered without the portal header and footer
    pub fn is_standalone(&self) -> bool {
        matches!(self, Route::Admin)
    }
}

/// Decode one query parameter; `+` counts as a space
fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            let v = v.replace('+', " ");
            urlencoding::decode(&v)
                .map(|d| d.into_owned())
                .unwrap_or(v)
        })
}

/// Route for the address currently in the location bar
pub fn current() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Home;
    };
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    Route::parse(&path, &search)
}

/// Push a history entry and switch pages
pub fn navigate(set_route: WriteSignal<Route>, route: Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.href())) {
            tracing::warn!("pushState failed: {:?}", e);
        }
    }
    tracing::debug!(?route, "navigate");
    set_route.set(route);
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("/top/", ""), Route::Top);
        assert_eq!(Route::parse("/admin/dashboard", ""), Route::Admin);
        assert_eq!(Route::parse("/nowhere", ""), Route::Home);
        assert_eq!(Route::parse("/categories", ""), Route::Categories(None));
        assert_eq!(
            Route::parse("/categories", "?c=puzzle"),
            Route::Categories(Some("puzzle".into()))
        );
    }

    #[test]
    fn test_search_query_is_decoded() {
        assert_eq!(
            Route::parse("/search", "?q=neon%20runner"),
            Route::Search("neon runner".into())
        );
        assert_eq!(Route::parse("/search", "q=speed+racer&x=1"), Route::Search("speed racer".into()));
        assert_eq!(Route::parse("/search", ""), Route::Search(String::new()));
    }

    #[test]
    fn test_href_parses_back() {
        for route in [
            Route::Home,
            Route::Top,
            Route::Categories(Some("rpg".into())),
            Route::Search("dragon's oath".into()),
            Route::SignIn,
        ] {
            assert_eq!(Route::from_href(&route.href()), route);
        }
    }
}
