//! The blog engine: payload validation, filter assembly, ownership checks,
//! update merging and soft deletion, tied together by [`BlogService`].

mod filter;
mod guard;
mod merge;
mod service;
mod soft_delete;
pub mod validate;

pub use filter::{PostQuery, owner_bulk_match, public_listing};
pub use guard::{Caller, authorize, authorize_claim};
pub use merge::{MergeOutcome, PostUpdate, merge};
pub use service::{BlogService, NewPost, UpdateOutcome};
