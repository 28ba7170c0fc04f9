//! Portal configuration
//!
//! Shipped as JSON next to the front end and embedded at build time. Every
//! field has a default so a partial file still loads.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::selector::TOP_GAMES_LIMIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub site_name: String,
    pub site_description: String,
    /// Cap for the "top games" view; values above `TOP_GAMES_LIMIT` are clamped
    pub top_games_limit: usize,
    /// Games in the home page "Top Picks" row
    pub featured_games_count: usize,
    pub max_games_per_page: usize,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
    pub admin: AdminCredentials,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            site_name: "GameVerse".to_string(),
            site_description: "Play Free Online Games".to_string(),
            top_games_limit: TOP_GAMES_LIMIT,
            featured_games_count: 6,
            max_games_per_page: 12,
            log_filter: "info,gameverse_core=debug,gameverse_frontend=debug".to_string(),
            admin: AdminCredentials::default(),
        }
    }
}

/// Demo admin login. Placeholder only, not an access-control mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "superadmin".to_string(),
            password: "Admin@123".to_string(),
        }
    }
}

impl PortalConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PortalConfig::default();
        assert_eq!(config.site_name, "GameVerse");
        assert_eq!(config.top_games_limit, 12);
        assert_eq!(config.featured_games_count, 6);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = PortalConfig::from_json(r#"{ "site_name": "Arcade Hub", "admin": { "username": "root" } }"#).unwrap();
        assert_eq!(config.site_name, "Arcade Hub");
        assert_eq!(config.top_games_limit, 12);
        assert_eq!(config.admin.username, "root");
        assert_eq!(config.admin.password, "Admin@123");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(PortalConfig::from_json(r#"{ "top_games_limit": "lots" }"#).is_err());
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = PortalConfig::from_json(include_str!("../../../config/portal.json")).unwrap();
        assert_eq!(config.top_games_limit, TOP_GAMES_LIMIT);
    }
}
