//! # Scribe Core
//!
//! The domain layer of the Scribe blog backend.
//! This crate holds the post model and the rules for creating, listing,
//! updating and retiring posts, with zero infrastructure dependencies.

pub mod blog;
pub mod domain;
pub mod error;
pub mod ids;
pub mod ports;

pub use blog::{BlogService, Caller, UpdateOutcome};
pub use error::DomainError;
pub use ids::{AuthorId, IdError, PostId};
