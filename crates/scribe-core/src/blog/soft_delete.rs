//! Soft deletion of single posts and query-matched sets of posts.

use chrono::{DateTime, Utc};

use super::filter::{PostQuery, owner_bulk_match};
use super::guard::{Caller, authorize, authorize_claim};
use super::validate::is_non_empty_payload;
use crate::domain::{Post, PostFilter, PostPatch};
use crate::error::DomainError;
use crate::ids::PostId;
use crate::ports::PostRepository;

/// Retire one post owned by the caller.
///
/// The write re-asserts ownership and liveness in its predicate, so a post
/// deleted or reassigned between the read and the write is reported as not
/// found rather than touched.
pub(crate) async fn delete_one(
    posts: &dyn PostRepository,
    caller: &Caller,
    id: PostId,
    now: DateTime<Utc>,
) -> Result<Post, DomainError> {
    let existing = posts
        .find_one(&PostFilter::live().with_id(id))
        .await?
        .ok_or_else(|| DomainError::blog_not_found(id))?;

    authorize(caller, &existing.author_id)?;

    let owned = PostFilter::live().with_id(id).owned_by(caller.author_id());
    posts
        .find_one_and_update(&owned, &PostPatch::soft_delete(now))
        .await?
        .ok_or_else(|| DomainError::blog_not_found(id))
}

/// Retire every live post of the caller matching any supplied criterion.
/// Zero matches is a success with a zero count.
pub(crate) async fn delete_matching(
    posts: &dyn PostRepository,
    caller: &Caller,
    query: &PostQuery,
    now: DateTime<Utc>,
) -> Result<u64, DomainError> {
    if !is_non_empty_payload(query) {
        return Err(DomainError::validation("Please provide query parameters"));
    }
    authorize_claim(caller, query.author_id.as_deref())?;

    let filter = owner_bulk_match(caller, query);
    Ok(posts
        .update_many(&filter, &PostPatch::soft_delete(now))
        .await?)
}
