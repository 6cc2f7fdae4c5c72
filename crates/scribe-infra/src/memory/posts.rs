//! In-memory post store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use scribe_core::PostId;
use scribe_core::domain::{Post, PostFilter, PostPatch};
use scribe_core::error::RepoError;
use scribe_core::ports::PostRepository;

/// Post store using a HashMap with async RwLock.
///
/// Every mutation holds the write lock for its whole read-modify-write, which
/// gives the per-document atomicity the port requires.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn oldest_first(posts: &mut [Post]) {
        posts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();
        Self::oldest_first(&mut posts);
        Ok(posts)
    }

    async fn find_one_and_update(
        &self,
        filter: &PostFilter,
        patch: &PostPatch,
    ) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        let target = store
            .values()
            .filter(|post| filter.matches(post))
            .min_by(|a, b| a.created_at.cmp(&b.created_at))
            .map(|post| post.id);

        Ok(target.and_then(|id| {
            let post = store.get_mut(&id)?;
            patch.apply(post);
            Some(post.clone())
        }))
    }

    async fn update_many(&self, filter: &PostFilter, patch: &PostPatch) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let mut count = 0;
        for post in store.values_mut().filter(|post| filter.matches(post)) {
            patch.apply(post);
            count += 1;
        }
        Ok(count)
    }
}
