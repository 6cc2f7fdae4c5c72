use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::AuthorId;

/// Author entity. Read-only from the blog engine's point of view; only its
/// existence and identity matter here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    pub salutation: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Author {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salutation: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: AuthorId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salutation: salutation.into(),
            email: email.into().trim().to_lowercase(),
            created_at: Utc::now(),
        }
    }
}
