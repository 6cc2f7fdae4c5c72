//! Computes the patch for a partial post update.
//!
//! | field                       | merge                                   |
//! |-----------------------------|-----------------------------------------|
//! | title, body, category       | replace when present and non-blank      |
//! | is_published                | set when present, `false` included      |
//! | tags, subcategory           | union into the stored set               |

use chrono::{DateTime, Utc};

use super::validate::{Payload, is_present};
use crate::domain::{PostPatch, TagSet};
use crate::error::DomainError;

/// Partial update payload. Tag and subcategory values arrive already
/// normalized to a list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub subcategory: Option<Vec<String>>,
    /// Keys sent without a usable value: unknown keys and explicit nulls.
    pub ignored: Vec<String>,
}

impl Payload for PostUpdate {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.category.is_none()
            && self.is_published.is_none()
            && self.tags.is_none()
            && self.subcategory.is_none()
            && self.ignored.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// The payload was empty; the post stays as it is.
    Unchanged,
    Patch(PostPatch),
}

fn replacement(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| is_present(Some(*v)))
        .map(|v| v.trim().to_string())
}

fn additions(value: &Option<Vec<String>>) -> TagSet {
    value.as_ref().map(TagSet::from_tokens).unwrap_or_default()
}

/// Merge `update` into a patch stamped with `now`.
///
/// A non-empty payload that yields no usable field is a validation error.
pub fn merge(update: &PostUpdate, now: DateTime<Utc>) -> Result<MergeOutcome, DomainError> {
    if update.is_empty() {
        return Ok(MergeOutcome::Unchanged);
    }

    let patch = PostPatch {
        title: replacement(&update.title),
        body: replacement(&update.body),
        category: replacement(&update.category),
        is_published: update.is_published,
        add_tags: additions(&update.tags),
        add_subcategory: additions(&update.subcategory),
        ..PostPatch::at(now)
    };

    if patch.is_empty() {
        return Err(DomainError::validation("No valid fields to update"));
    }

    Ok(MergeOutcome::Patch(patch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch_of(update: PostUpdate) -> PostPatch {
        match merge(&update, Utc::now()).unwrap() {
            MergeOutcome::Patch(patch) => patch,
            MergeOutcome::Unchanged => panic!("expected a patch"),
        }
    }

    #[test]
    fn test_empty_payload_is_unchanged() {
        let outcome = merge(&PostUpdate::default(), Utc::now()).unwrap();
        assert_eq!(outcome, MergeOutcome::Unchanged);
    }

    #[test]
    fn test_blank_scalars_are_skipped() {
        let patch = patch_of(PostUpdate {
            title: Some("  ".into()),
            body: Some(" new body ".into()),
            ..PostUpdate::default()
        });

        assert!(patch.title.is_none());
        assert_eq!(patch.body.as_deref(), Some("new body"));
        assert!(patch.category.is_none());
    }

    #[test]
    fn test_explicit_false_is_kept() {
        let patch = patch_of(PostUpdate {
            is_published: Some(false),
            ..PostUpdate::default()
        });
        assert_eq!(patch.is_published, Some(false));
    }

    #[test]
    fn test_tags_become_additions() {
        let patch = patch_of(PostUpdate {
            tags: Some(vec!["x".into(), " y ".into(), "x".into()]),
            subcategory: Some(vec!["web".into()]),
            ..PostUpdate::default()
        });

        assert_eq!(patch.add_tags.as_slice(), ["x", "y"]);
        assert_eq!(patch.add_subcategory.as_slice(), ["web"]);
    }

    #[test]
    fn test_payload_without_usable_field_is_rejected() {
        let only_blank = PostUpdate {
            title: Some("".into()),
            tags: Some(vec!["  ".into()]),
            ..PostUpdate::default()
        };
        assert!(matches!(
            merge(&only_blank, Utc::now()),
            Err(DomainError::Validation(_))
        ));

        let only_unknown = PostUpdate {
            ignored: vec!["authorId".into()],
            ..PostUpdate::default()
        };
        assert!(matches!(
            merge(&only_unknown, Utc::now()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_null_valued_keys_are_not_an_empty_payload() {
        let only_nulls = PostUpdate {
            ignored: vec!["tags".into(), "isPublished".into()],
            ..PostUpdate::default()
        };
        assert!(!only_nulls.is_empty());
        assert!(matches!(
            merge(&only_nulls, Utc::now()),
            Err(DomainError::Validation(msg)) if msg == "No valid fields to update"
        ));
    }
}
