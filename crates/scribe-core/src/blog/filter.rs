//! Turns free-form query parameters into a [`PostFilter`].
//!
//! Two modes exist. Public listing narrows with all-of semantics and silently
//! ignores malformed parameters. The owner-scoped bulk match used by bulk
//! delete combines the supplied criteria with any-of semantics.

use super::guard::Caller;
use super::validate::{Payload, is_present};
use crate::domain::{Criterion, PostFilter, TagSet};
use crate::ids::AuthorId;

/// Raw query parameters, uninterpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub author_id: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub subcategory: Option<String>,
    pub is_published: Option<String>,
}

impl Payload for PostQuery {
    fn is_empty(&self) -> bool {
        self.author_id.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.subcategory.is_none()
            && self.is_published.is_none()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| is_present(Some(*v)))
        .map(str::trim)
}

fn labels(value: &Option<String>) -> Option<TagSet> {
    present(value)
        .map(TagSet::parse_delimited)
        .filter(|set| !set.is_empty())
}

fn flag(value: &Option<String>) -> Option<bool> {
    match present(value)? {
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Predicate for the public post listing: live, published posts, narrowed by
/// whichever well-formed parameters were supplied.
pub fn public_listing(query: &PostQuery) -> PostFilter {
    let mut filter = PostFilter {
        is_published: Some(true),
        ..PostFilter::live()
    };

    if let Some(author_id) = present(&query.author_id).and_then(|v| AuthorId::parse(v).ok()) {
        filter.author_id = Some(author_id);
    }
    if let Some(category) = present(&query.category) {
        filter.category = Some(category.to_string());
    }
    if let Some(tags) = labels(&query.tags) {
        filter.tags = tags;
    }
    if let Some(subcategory) = labels(&query.subcategory) {
        filter.subcategory = subcategory;
    }

    filter
}

/// Predicate for bulk delete: the caller's live posts matching any of the
/// supplied criteria. With no criterion at all, every live post of the caller
/// matches.
pub fn owner_bulk_match(caller: &Caller, query: &PostQuery) -> PostFilter {
    let mut any_of = Vec::new();

    if let Some(category) = present(&query.category) {
        any_of.push(Criterion::Category(category.to_string()));
    }
    if let Some(tags) = labels(&query.tags) {
        any_of.push(Criterion::Tags(tags));
    }
    if let Some(subcategory) = labels(&query.subcategory) {
        any_of.push(Criterion::Subcategory(subcategory));
    }
    if let Some(published) = flag(&query.is_published) {
        any_of.push(Criterion::Published(published));
    }

    PostFilter {
        any_of,
        ..PostFilter::live().owned_by(caller.author_id())
    }
}
