use super::{Post, TagSet};
use crate::ids::{AuthorId, PostId};

/// Store-neutral predicate over posts.
///
/// Every populated field must hold (conjunction). `tags` and `subcategory`
/// are all-of matches. `any_of`, when non-empty, additionally requires at
/// least one of its criteria to hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub id: Option<PostId>,
    pub author_id: Option<AuthorId>,
    pub category: Option<String>,
    pub tags: TagSet,
    pub subcategory: TagSet,
    pub is_published: Option<bool>,
    pub is_deleted: Option<bool>,
    pub any_of: Vec<Criterion>,
}

/// One alternative in an any-of group.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Category(String),
    /// Post carries every listed tag.
    Tags(TagSet),
    /// Post carries every listed subcategory.
    Subcategory(TagSet),
    Published(bool),
}

impl Criterion {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Criterion::Category(category) => post.category == *category,
            Criterion::Tags(tags) => post.tags.contains_all(tags),
            Criterion::Subcategory(subcategory) => post.subcategory.contains_all(subcategory),
            Criterion::Published(published) => post.is_published == *published,
        }
    }
}

impl PostFilter {
    /// Posts that have not been soft-deleted.
    pub fn live() -> Self {
        Self {
            is_deleted: Some(false),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: PostId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn owned_by(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// Evaluate the predicate in process.
    pub fn matches(&self, post: &Post) -> bool {
        if self.id.is_some_and(|id| id != post.id) {
            return false;
        }
        if self.author_id.is_some_and(|author| author != post.author_id) {
            return false;
        }
        if self
            .category
            .as_ref()
            .is_some_and(|category| *category != post.category)
        {
            return false;
        }
        if self.is_published.is_some_and(|p| p != post.is_published) {
            return false;
        }
        if self.is_deleted.is_some_and(|d| d != post.is_deleted) {
            return false;
        }
        if !post.tags.contains_all(&self.tags) || !post.subcategory.contains_all(&self.subcategory) {
            return false;
        }

        self.any_of.is_empty() || self.any_of.iter().any(|c| c.matches(post))
    }
}
