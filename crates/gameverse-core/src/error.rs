//! Error types for the core library

use thiserror::Error;

/// Invariant violations found while building a [`crate::Catalog`]
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate game id '{0}'")]
    DuplicateGameId(String),
    #[error("duplicate category slug '{0}'")]
    DuplicateSlug(String),
    #[error("category slug '{0}' is not URL-safe")]
    InvalidSlug(String),
    #[error("game '{game}' references unknown category '{category}'")]
    UnknownCategory { game: String, category: String },
    #[error("game '{game}' has rating {rating} outside 0..=5")]
    RatingOutOfRange { game: String, rating: f32 },
    #[error("game '{game}' lists badge '{badge}' more than once")]
    DuplicateBadge { game: String, badge: String },
}

/// Rejected admin console actions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("please enter a game title")]
    EmptyTitle,
    #[error("no game with id {0}")]
    UnknownGame(u32),
}

/// Authentication failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("email address is required")]
    MissingEmail,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse portal config: {0}")]
    Parse(#[from] serde_json::Error),
}
