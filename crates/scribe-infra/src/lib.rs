//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post store and author directory via SeaORM
//! - `auth` - JWT bearer token verification

pub mod database;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use memory::{InMemoryAuthorDirectory, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresAuthorDirectory, PostgresPostRepository};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
