//! Application configuration loaded from environment variables.

use std::env;

use scribe_core::AuthorId;
use scribe_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Authors known to the in-memory directory when no database is used.
    pub seed_authors: Vec<AuthorId>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            seed_authors: env::var("SEED_AUTHOR_IDS")
                .map(|raw| Self::parse_author_ids(&raw))
                .unwrap_or_default(),
        }
    }

    /// Parse a comma-separated list of author ids, skipping malformed ones.
    /// Example: SEED_AUTHOR_IDS=67e55044-10b1-426f-9247-bb680e5fe0c8,...
    fn parse_author_ids(raw: &str) -> Vec<AuthorId> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| match AuthorId::parse(s) {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!("Skipping seed author: {}", e);
                    None
                }
            })
            .collect()
    }
}
