//! In-memory adapters - used when no database is configured, and in tests.
//! Data is lost on process restart.

mod authors;
mod posts;

pub use authors::InMemoryAuthorDirectory;
pub use posts::InMemoryPostRepository;

#[cfg(test)]
mod tests;
