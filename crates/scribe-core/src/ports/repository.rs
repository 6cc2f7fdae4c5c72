use async_trait::async_trait;

use crate::domain::{Post, PostFilter, PostPatch};
use crate::error::RepoError;
use crate::ids::AuthorId;

/// Post document store.
///
/// Implementations must make `find_one_and_update` atomic for the matched
/// document, and must evaluate the predicate of `update_many` per document
/// at write time.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// All posts matching `filter`, oldest first.
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;

    async fn find_one(&self, filter: &PostFilter) -> Result<Option<Post>, RepoError> {
        Ok(self.find(filter).await?.into_iter().next())
    }

    /// Apply `patch` to the first post matching `filter` and return the
    /// updated post, or `None` when nothing matched.
    async fn find_one_and_update(
        &self,
        filter: &PostFilter,
        patch: &PostPatch,
    ) -> Result<Option<Post>, RepoError>;

    /// Apply `patch` to every post matching `filter`; returns the count.
    async fn update_many(&self, filter: &PostFilter, patch: &PostPatch) -> Result<u64, RepoError>;
}

/// Author lookup used when a post is created.
#[async_trait]
pub trait AuthorDirectory: Send + Sync {
    async fn exists(&self, author_id: &AuthorId) -> Result<bool, RepoError>;
}
