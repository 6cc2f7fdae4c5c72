//! Request extractors and error mapping.

pub mod auth;
pub mod error;

pub use auth::Identity;
pub use error::{AppResult, json_config, query_config};
