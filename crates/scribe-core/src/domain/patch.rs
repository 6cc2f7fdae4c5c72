use chrono::{DateTime, Utc};

use super::{Post, TagSet};

/// Store-neutral change set for posts.
///
/// Scalars replace, the publish flag goes through [`Post::set_published`],
/// tag and subcategory additions are unioned in, and `soft_delete` marks the
/// post deleted. `at` is the timestamp used for every time field touched.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub add_tags: TagSet,
    pub add_subcategory: TagSet,
    pub soft_delete: bool,
    pub at: DateTime<Utc>,
}

impl PostPatch {
    /// An empty patch stamped with `at`.
    pub fn at(at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            body: None,
            category: None,
            is_published: None,
            add_tags: TagSet::new(),
            add_subcategory: TagSet::new(),
            soft_delete: false,
            at,
        }
    }

    pub fn soft_delete(at: DateTime<Utc>) -> Self {
        Self {
            soft_delete: true,
            ..Self::at(at)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.category.is_none()
            && self.is_published.is_none()
            && self.add_tags.is_empty()
            && self.add_subcategory.is_empty()
            && !self.soft_delete
    }

    /// True when applying the patch does not depend on the stored row, so a
    /// store may apply it as a plain column assignment.
    pub fn is_row_independent(&self) -> bool {
        self.is_published.is_none() && self.add_tags.is_empty() && self.add_subcategory.is_empty()
    }

    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(body) = &self.body {
            post.body = body.clone();
        }
        if let Some(category) = &self.category {
            post.category = category.clone();
        }
        if let Some(published) = self.is_published {
            post.set_published(published, self.at);
        }
        post.tags.union(&self.add_tags);
        post.subcategory.union(&self.add_subcategory);
        if self.soft_delete {
            post.mark_deleted(self.at);
        }
        post.updated_at = self.at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::AuthorId;

    #[test]
    fn test_apply_unions_sets_and_replaces_scalars() {
        let mut post = Post::new(AuthorId::new(), "T".into(), "B".into(), "tech".into())
            .with_tags(TagSet::from_tokens(["a"]));
        let now = Utc::now();

        let patch = PostPatch {
            title: Some("New".to_string()),
            add_tags: TagSet::from_tokens(["a", "x"]),
            is_published: Some(true),
            ..PostPatch::at(now)
        };
        patch.apply(&mut post);

        assert_eq!(post.title, "New");
        assert_eq!(post.body, "B");
        assert_eq!(post.tags.as_slice(), ["a", "x"]);
        assert_eq!(post.published_at, Some(now));
        assert_eq!(post.updated_at, now);
    }

    #[test]
    fn test_soft_delete_patch() {
        let now = Utc::now();
        let patch = PostPatch::soft_delete(now);
        assert!(!patch.is_empty());
        assert!(patch.is_row_independent());

        let mut post = Post::new(AuthorId::new(), "T".into(), "B".into(), "tech".into());
        patch.apply(&mut post);
        assert!(post.is_deleted);
        assert_eq!(post.deleted_at, Some(now));
    }

    #[test]
    fn test_empty_patch() {
        assert!(PostPatch::at(Utc::now()).is_empty());
    }
}
