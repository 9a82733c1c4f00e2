//! Application configuration loaded from environment variables.
//!
//! Environment variables:
//! - `BETTERCT_PUBLISHABLE_KEY`: identity provider publishable key (required)
//! - `BETTERCT_TEMPLATE_IMAGE_URL`: base URL for showcase images (default: `https://mui.com`)
//! - `BETTERCT_BIND_ADDR`: full bind address (default: `127.0.0.1:3000`)
//! - `PORT`: port to bind on `0.0.0.0` when `BETTERCT_BIND_ADDR` is unset
//! - `BETTERCT_DATABASE_PATH`: task board database file, or `:memory:`
//! - `BETTERCT_CORS_ORIGINS`: allowed origins for the task API, comma-separated
//! - `BETTERCT_RATE_LIMIT`: task API requests per minute per IP (default: 100)
//! - `BETTERCT_TRUST_FORWARDED_FOR`: key the rate limit on `X-Forwarded-For` /
//!   `X-Real-IP` instead of the peer address (only behind a trusted proxy)
//! - `BETTERCT_PLAIN_THEME`: render with the stock palette and typography

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::identity::{KeyError, PublishableKey};

pub const PUBLISHABLE_KEY_VAR: &str = "BETTERCT_PUBLISHABLE_KEY";
pub const TEMPLATE_IMAGE_URL_VAR: &str = "BETTERCT_TEMPLATE_IMAGE_URL";
pub const BIND_ADDR_VAR: &str = "BETTERCT_BIND_ADDR";
pub const PORT_VAR: &str = "PORT";
pub const DATABASE_PATH_VAR: &str = "BETTERCT_DATABASE_PATH";
pub const CORS_ORIGINS_VAR: &str = "BETTERCT_CORS_ORIGINS";
pub const RATE_LIMIT_VAR: &str = "BETTERCT_RATE_LIMIT";
pub const TRUST_FORWARDED_VAR: &str = "BETTERCT_TRUST_FORWARDED_FOR";
pub const PLAIN_THEME_VAR: &str = "BETTERCT_PLAIN_THEME";

pub const DEFAULT_TEMPLATE_IMAGE_URL: &str = "https://mui.com";
pub const DEFAULT_RATE_LIMIT: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BETTERCT_PUBLISHABLE_KEY is not set; the identity provider cannot be configured")]
    MissingPublishableKey,
    #[error("BETTERCT_PUBLISHABLE_KEY is invalid: {0}")]
    InvalidPublishableKey(#[from] KeyError),
    #[error("invalid bind address {value:?}")]
    InvalidBindAddr { value: String },
}

/// Where the task board keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// Platform data directory.
    Default,
    Memory,
    File(PathBuf),
}

/// Validated application configuration.
///
/// Read-only after startup; shared by reference with everything that needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub publishable_key: PublishableKey,
    /// Base URL for feature showcase images, without a trailing slash.
    pub template_image_url: String,
    pub bind_addr: SocketAddr,
    pub database: DatabaseLocation,
    pub cors_origins: Option<Vec<String>>,
    pub rate_limit: u32,
    /// Take client addresses from proxy headers rather than the socket.
    pub trust_forwarded: bool,
    pub plain_theme: bool,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let publishable_key = get(PUBLISHABLE_KEY_VAR)
            .ok_or(ConfigError::MissingPublishableKey)
            .and_then(|raw| Ok(PublishableKey::parse(&raw)?))?;

        let template_image_url = get(TEMPLATE_IMAGE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_IMAGE_URL.to_string());

        // Priority: BETTERCT_BIND_ADDR > PORT > 127.0.0.1:3000
        let bind_addr = if let Some(addr) = get(BIND_ADDR_VAR) {
            addr.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { value: addr })?
        } else if let Some(port) = get(PORT_VAR) {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { value: port })?;
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 3000))
        };

        let database = match get(DATABASE_PATH_VAR) {
            None => DatabaseLocation::Default,
            Some(path) if path.trim() == ":memory:" => DatabaseLocation::Memory,
            Some(path) => DatabaseLocation::File(PathBuf::from(path.trim())),
        };

        let cors_origins = get(CORS_ORIGINS_VAR).map(|s| {
            s.split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect()
        });

        let rate_limit = get(RATE_LIMIT_VAR)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT);

        let trust_forwarded = get(TRUST_FORWARDED_VAR).is_some_and(|v| is_enabled(&v));
        let plain_theme = get(PLAIN_THEME_VAR).is_some_and(|v| is_enabled(&v));

        Ok(Self {
            publishable_key,
            template_image_url,
            bind_addr,
            database,
            cors_origins,
            rate_limit,
            trust_forwarded,
            plain_theme,
        })
    }

    /// Configuration for tests: the given key and defaults everywhere else.
    pub fn for_key(publishable_key: PublishableKey) -> Self {
        Self {
            publishable_key,
            template_image_url: DEFAULT_TEMPLATE_IMAGE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database: DatabaseLocation::Memory,
            cors_origins: None,
            rate_limit: DEFAULT_RATE_LIMIT,
            trust_forwarded: false,
            plain_theme: false,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }
}

fn is_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::KeyEnvironment;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn test_key() -> String {
        PublishableKey::for_host(KeyEnvironment::Test, "clerk.example.com")
            .as_str()
            .to_string()
    }

    #[test]
    fn missing_key_is_fatal() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPublishableKey));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = AppConfig::from_lookup(lookup(&[(PUBLISHABLE_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPublishableKey));
    }

    #[test]
    fn malformed_key_is_fatal() {
        let err =
            AppConfig::from_lookup(lookup(&[(PUBLISHABLE_KEY_VAR, "not-a-key")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPublishableKey(KeyError::UnknownPrefix)));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let key = test_key();
        let config = AppConfig::from_lookup(lookup(&[(PUBLISHABLE_KEY_VAR, key.as_str())])).unwrap();

        assert_eq!(config.publishable_key.frontend_api(), "clerk.example.com");
        assert_eq!(config.template_image_url, DEFAULT_TEMPLATE_IMAGE_URL);
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.database, DatabaseLocation::Default);
        assert!(config.cors_origins.is_none());
        assert_eq!(config.rate_limit, DEFAULT_RATE_LIMIT);
        assert!(!config.trust_forwarded);
        assert!(!config.plain_theme);
    }

    #[test]
    fn optional_values_are_read() {
        let key = test_key();
        let config = AppConfig::from_lookup(lookup(&[
            (PUBLISHABLE_KEY_VAR, key.as_str()),
            (TEMPLATE_IMAGE_URL_VAR, "https://cdn.example.com/"),
            (PORT_VAR, "8080"),
            (DATABASE_PATH_VAR, "/var/lib/betterct/tasks.db"),
            (CORS_ORIGINS_VAR, "https://a.example, https://b.example"),
            (RATE_LIMIT_VAR, "20"),
            (TRUST_FORWARDED_VAR, "true"),
            (PLAIN_THEME_VAR, "1"),
        ]))
        .unwrap();

        assert_eq!(config.template_image_url, "https://cdn.example.com");
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.database,
            DatabaseLocation::File(PathBuf::from("/var/lib/betterct/tasks.db"))
        );
        assert_eq!(
            config.cors_origins,
            Some(vec!["https://a.example".to_string(), "https://b.example".to_string()])
        );
        assert_eq!(config.rate_limit, 20);
        assert!(config.trust_forwarded);
        assert!(config.plain_theme);
    }

    #[test]
    fn flags_ignore_other_values() {
        let key = test_key();
        let config = AppConfig::from_lookup(lookup(&[
            (PUBLISHABLE_KEY_VAR, key.as_str()),
            (TRUST_FORWARDED_VAR, "0"),
            (PLAIN_THEME_VAR, "nope"),
        ]))
        .unwrap();

        assert!(!config.trust_forwarded);
        assert!(!config.plain_theme);
    }

    #[test]
    fn bind_addr_wins_over_port() {
        let key = test_key();
        let config = AppConfig::from_lookup(lookup(&[
            (PUBLISHABLE_KEY_VAR, key.as_str()),
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (PORT_VAR, "8080"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let key = test_key();
        let err = AppConfig::from_lookup(lookup(&[
            (PUBLISHABLE_KEY_VAR, key.as_str()),
            (BIND_ADDR_VAR, "localhost"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn memory_database_marker() {
        let key = test_key();
        let config = AppConfig::from_lookup(lookup(&[
            (PUBLISHABLE_KEY_VAR, key.as_str()),
            (DATABASE_PATH_VAR, ":memory:"),
        ]))
        .unwrap();

        assert_eq!(config.database, DatabaseLocation::Memory);
    }
}
