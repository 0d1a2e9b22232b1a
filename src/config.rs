use std::env;

use crate::domain::DEFAULT_GRID_SIZE;

const DEFAULT_PORT: u16 = 9000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_JSON_PAYLOAD_LIMIT: usize = 64 * 1024;
const DEFAULT_MAX_GRID_SIZE: usize = 10_000;

/// Server settings, read from the environment (and `.env`, loaded by `main`).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
    /// Grid size used when a request does not specify one.
    pub grid_size: usize,
    /// Largest grid a request may ask for.
    pub max_grid_size: usize,
    pub sentry_dsn: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            json_limit: DEFAULT_JSON_PAYLOAD_LIMIT,
            grid_size: DEFAULT_GRID_SIZE,
            max_grid_size: DEFAULT_MAX_GRID_SIZE,
            sentry_dsn: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset or unparsable values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();

        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<usize>().ok());

        let port = lookup("PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let host = lookup("HOST")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.host);

        let json_limit = parsed("JSON_PAYLOAD_LIMIT").unwrap_or(defaults.json_limit);

        let max_grid_size = parsed("MAX_GRID_SIZE")
            .filter(|&n| n >= 2)
            .unwrap_or(defaults.max_grid_size);

        let grid_size = match parsed("GRID_SIZE") {
            Some(n) if (2..=max_grid_size).contains(&n) => n,
            Some(n) => {
                log::warn!(
                    "GRID_SIZE={} is outside 2..={}, using {}",
                    n,
                    max_grid_size,
                    defaults.grid_size.min(max_grid_size),
                );
                defaults.grid_size.min(max_grid_size)
            }
            None => defaults.grid_size.min(max_grid_size),
        };

        let sentry_dsn = lookup("SENTRY_DSN").filter(|s| !s.trim().is_empty());

        ServerConfig {
            host,
            port,
            json_limit,
            grid_size,
            max_grid_size,
            sentry_dsn,
        }
    }
}
