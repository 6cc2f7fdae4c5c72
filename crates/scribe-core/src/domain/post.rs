use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TagSet;
use crate::ids::{AuthorId, PostId};

/// Post entity - a blog entry owned by one author.
///
/// `published_at` is set exactly when `is_published` is true, and
/// `deleted_at` exactly when `is_deleted` is true. Use [`Post::set_published`]
/// and [`Post::mark_deleted`] to keep those pairs consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: AuthorId,
    pub title: String,
    pub body: String,
    pub category: String,
    pub tags: TagSet,
    pub subcategory: TagSet,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new unpublished post.
    pub fn new(author_id: AuthorId, title: String, body: String, category: String) -> Self {
        let now = Utc::now();
        Self {
            id: PostId::new(),
            author_id,
            title,
            body,
            category,
            tags: TagSet::new(),
            subcategory: TagSet::new(),
            is_published: false,
            published_at: None,
            is_deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_subcategory(mut self, subcategory: TagSet) -> Self {
        self.subcategory = subcategory;
        self
    }

    /// Change publish state. `published_at` only moves on an actual transition.
    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        if published == self.is_published {
            return;
        }
        self.is_published = published;
        self.published_at = published.then_some(now);
    }

    /// Soft-delete the post. Deletion is terminal.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        if self.is_deleted {
            return;
        }
        self.is_deleted = true;
        self.deleted_at = Some(now);
    }
}
