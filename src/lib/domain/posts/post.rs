//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post UUID
    pub id: Uuid,

    /// Post title
    pub title: String,

    /// Post body text
    pub body: String,

    /// Post created at date in UTC
    pub created_at: DateTime<Utc>,

    /// Post last updated at date in UTC
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with the given title and body
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
