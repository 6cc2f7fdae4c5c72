//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{AuthorDirectory, PostRepository};
use scribe_core::{AuthorId, BlogService};
use scribe_infra::database::DatabaseConnections;
use scribe_infra::{InMemoryAuthorDirectory, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use scribe_infra::{PostgresAuthorDirectory, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let posts = Arc::new(PostgresPostRepository::new(conn.main.clone()));
                        let authors = Arc::new(PostgresAuthorDirectory::new(conn.main.clone()));
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            blog: BlogService::new(posts, authors),
                            db: Some(conn),
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory repository");

        tracing::info!(
            seed_authors = config.seed_authors.len(),
            "Application state initialized (memory)"
        );
        Self::in_memory(&config.seed_authors)
    }

    /// State backed by in-memory stores, with the given authors registered.
    pub fn in_memory(seed_authors: &[AuthorId]) -> Self {
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        let authors: Arc<dyn AuthorDirectory> = Arc::new(InMemoryAuthorDirectory::with_ids(
            seed_authors.iter().copied(),
        ));
        Self {
            blog: BlogService::new(posts, authors),
            db: None,
        }
    }

    /// Name of the active storage backend.
    pub fn storage(&self) -> &'static str {
        if self.db.is_some() { "postgres" } else { "memory" }
    }
}
