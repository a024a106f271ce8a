//! Application configuration loaded from environment variables.

use std::env;

use tabloid_infra::JwtConfig;
use tabloid_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `DATABASE_URL` is unset; the server then runs in-memory.
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    /// First administrator, created or promoted at startup.
    pub admin: Option<AdminConfig>,
}

/// Identity of the bootstrap administrator (`ADMIN_EXTERNAL_ID`, `ADMIN_EMAIL`).
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub external_id: String,
    pub email: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(20),
                min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(2),
            });

        let admin = env::var("ADMIN_EXTERNAL_ID")
            .ok()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .map(|external_id| AdminConfig {
                external_id,
                email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".to_string()),
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            jwt: JwtConfig::from_env(),
            admin,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
