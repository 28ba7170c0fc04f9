mod app;
mod components;
mod location;
mod logging;
mod pages;

use std::sync::Arc;

use gameverse_core::{Catalog, PortalConfig};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::app::App;

/// Site configuration shipped with the front end
const PORTAL_CONFIG: &str = include_str!("../config/portal.json");

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match PortalConfig::from_json(PORTAL_CONFIG) {
        Ok(config) => (config, None),
        Err(e) => (PortalConfig::default(), Some(e)),
    };
    logging::init_logging(&config.log_filter);
    if let Some(e) = config_error {
        tracing::warn!("Using default portal config: {}", e);
    }

    let catalog = Catalog::embedded().unwrap_or_else(|e| {
        tracing::error!("Failed to load game catalog: {}", e);
        Catalog::default()
    });
    let catalog = Arc::new(catalog);

    leptos::mount::mount_to_body(move || view! { <App catalog=catalog config=config /> });
}
