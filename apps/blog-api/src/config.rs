//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Number of HTTP workers; `None` lets actix pick one per core.
    pub workers: Option<usize>,
    /// Grace period for in-flight requests when the server stops.
    pub shutdown_timeout: Duration,
    /// Deadline applied to every document store call made by a handler.
    pub store_timeout: Duration,
    pub database: Option<DatabaseConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
            shutdown_timeout: Duration::from_secs(30),
            store_timeout: Duration::from_secs(5),
            database: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(100),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            workers: parse_var("WORKERS"),
            shutdown_timeout: parse_var("SHUTDOWN_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.shutdown_timeout),
            store_timeout: parse_var("STORE_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.store_timeout),
            database,
        }
    }

    /// Point the server at a database by URL, with a small pool.
    ///
    /// `None` selects the in-memory store.
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        self.database = url.map(|url| DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
        });
        self
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
