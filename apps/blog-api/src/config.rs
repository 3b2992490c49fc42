//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/blog-app";
pub const DEFAULT_TEST_DATABASE_URL: &str = "postgres://localhost/blog-app-test";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                min_connections: env::var("DB_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1),
            },
        }
    }

    /// Loopback config on an ephemeral port backed by the in-memory store.
    pub fn ephemeral() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: DatabaseConfig::in_memory(),
        }
    }
}

/// Store used by database-backed tests.
pub fn test_database_url() -> String {
    env::var("TEST_DATABASE_URL").unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.to_string())
}
