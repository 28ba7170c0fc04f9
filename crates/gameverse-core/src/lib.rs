//! GameVerse Core - catalog, filtering and per-page state for the portal front end

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod notifications;
pub mod sections;
pub mod selector;

pub use catalog::Catalog;
pub use config::PortalConfig;
pub use controller::{ListController, ListMode, Selection};
pub use error::{AdminError, AuthError, CatalogError, ConfigError};
pub use model::{Badge, Category, Game, ALL_SLUG};
pub use selector::{Filter, TOP_GAMES_LIMIT};
