//! Blog operations: create, list, update, delete, bulk delete.

use std::sync::Arc;

use chrono::Utc;

use super::filter::{PostQuery, public_listing};
use super::guard::{Caller, authorize};
use super::merge::{MergeOutcome, PostUpdate, merge};
use super::soft_delete;
use super::validate::{Payload, is_non_empty_payload, require};
use crate::domain::{Post, PostFilter, TagSet};
use crate::error::DomainError;
use crate::ids::{AuthorId, PostId};
use crate::ports::{AuthorDirectory, PostRepository};

/// Creation payload. Every field is optional so that each missing one can be
/// reported precisely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author_id: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub subcategory: Option<Vec<String>>,
    pub is_published: Option<bool>,
    /// Keys sent without a usable value.
    pub ignored: Vec<String>,
}

impl Payload for NewPost {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.author_id.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.subcategory.is_none()
            && self.is_published.is_none()
            && self.ignored.is_empty()
    }
}

/// Result of an update request.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Empty payload; carries the stored post.
    Unchanged(Post),
    Updated(Post),
}

impl UpdateOutcome {
    pub fn into_post(self) -> Post {
        match self {
            UpdateOutcome::Unchanged(post) | UpdateOutcome::Updated(post) => post,
        }
    }
}

fn parse_post_id(raw: &str) -> Result<PostId, DomainError> {
    PostId::parse(raw.trim()).map_err(|e| DomainError::validation(e.to_string()))
}

/// Entry point for every blog operation.
///
/// Holds no mutable state; the repository is the only shared resource.
#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
    authors: Arc<dyn AuthorDirectory>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>, authors: Arc<dyn AuthorDirectory>) -> Self {
        Self { posts, authors }
    }

    /// Create a post after validating the payload and checking that the
    /// author exists.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        if !is_non_empty_payload(&input) {
            return Err(DomainError::validation(
                "Invalid request parameters. Please provide blog details",
            ));
        }

        let title = require(input.title.as_deref(), "Blog title is required")?;
        let body = require(input.body.as_deref(), "Blog body is required")?;
        let author_id = require(input.author_id.as_deref(), "Author id is required")?;
        let author_id =
            AuthorId::parse(author_id).map_err(|e| DomainError::validation(e.to_string()))?;
        let category = require(input.category.as_deref(), "Blog category is required")?;

        if !self.authors.exists(&author_id).await? {
            return Err(DomainError::validation("Author does not exist"));
        }

        let mut post = Post::new(
            author_id,
            title.to_string(),
            body.to_string(),
            category.to_string(),
        );
        if let Some(tags) = &input.tags {
            post.tags = TagSet::from_tokens(tags);
        }
        if let Some(subcategory) = &input.subcategory {
            post.subcategory = TagSet::from_tokens(subcategory);
        }
        if input.is_published.unwrap_or(false) {
            post.set_published(true, post.created_at);
        }

        Ok(self.posts.create(post).await?)
    }

    /// Published, live posts narrowed by the query. An empty result is not
    /// an error.
    pub async fn list(&self, query: &PostQuery) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find(&public_listing(query)).await?)
    }

    /// Apply a partial update to a post owned by the caller.
    pub async fn update(
        &self,
        caller: &Caller,
        id: &str,
        update: PostUpdate,
    ) -> Result<UpdateOutcome, DomainError> {
        let id = parse_post_id(id)?;
        let existing = self
            .posts
            .find_one(&PostFilter::live().with_id(id))
            .await?
            .ok_or_else(|| DomainError::blog_not_found(id))?;

        authorize(caller, &existing.author_id)?;

        let patch = match merge(&update, Utc::now())? {
            MergeOutcome::Unchanged => return Ok(UpdateOutcome::Unchanged(existing)),
            MergeOutcome::Patch(patch) => patch,
        };

        let owned = PostFilter::live().with_id(id).owned_by(caller.author_id());
        self.posts
            .find_one_and_update(&owned, &patch)
            .await?
            .map(UpdateOutcome::Updated)
            .ok_or_else(|| DomainError::blog_not_found(id))
    }

    /// Soft-delete a single post owned by the caller.
    pub async fn delete(&self, caller: &Caller, id: &str) -> Result<Post, DomainError> {
        let id = parse_post_id(id)?;
        soft_delete::delete_one(self.posts.as_ref(), caller, id, Utc::now()).await
    }

    /// Soft-delete the caller's posts matching the query. Returns the number
    /// of posts retired.
    pub async fn delete_by_query(
        &self,
        caller: &Caller,
        query: &PostQuery,
    ) -> Result<u64, DomainError> {
        soft_delete::delete_matching(self.posts.as_ref(), caller, query, Utc::now()).await
    }
}
