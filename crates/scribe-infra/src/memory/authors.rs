//! In-memory author directory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use scribe_core::AuthorId;
use scribe_core::domain::Author;
use scribe_core::error::RepoError;
use scribe_core::ports::AuthorDirectory;

/// Author directory backed by a HashMap behind an async RwLock.
pub struct InMemoryAuthorDirectory {
    authors: RwLock<HashMap<AuthorId, Author>>,
}

impl InMemoryAuthorDirectory {
    pub fn new() -> Self {
        Self {
            authors: RwLock::new(HashMap::new()),
        }
    }

    /// Directory pre-populated with placeholder authors for the given ids.
    pub fn with_ids(ids: impl IntoIterator<Item = AuthorId>) -> Self {
        let authors = ids
            .into_iter()
            .map(|id| {
                let author = Author {
                    id,
                    ..Author::new("Seed", "Author", "Mx", format!("{id}@seed.local"))
                };
                (id, author)
            })
            .collect();

        Self {
            authors: RwLock::new(authors),
        }
    }

    pub async fn insert(&self, author: Author) {
        self.authors.write().await.insert(author.id, author);
    }
}

impl Default for InMemoryAuthorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorDirectory for InMemoryAuthorDirectory {
    async fn exists(&self, author_id: &AuthorId) -> Result<bool, RepoError> {
        Ok(self.authors.read().await.contains_key(author_id))
    }
}
