//! Domain entities - the core business objects.

mod author;
mod filter;
mod patch;
mod post;
mod tags;

pub use author::Author;
pub use filter::{Criterion, PostFilter};
pub use patch::PostPatch;
pub use post::Post;
pub use tags::TagSet;
