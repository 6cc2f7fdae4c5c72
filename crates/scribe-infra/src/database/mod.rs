//! Database connection management and PostgreSQL adapters.

mod connections;

#[cfg(feature = "postgres")]
mod condition;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_repo;

pub use connections::{DatabaseConfig, DatabaseConnections};

#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresAuthorDirectory, PostgresPostRepository};
