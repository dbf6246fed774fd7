//! Tweet entity.

use chrono::{DateTime, Utc};

/// A posted message.
///
/// `id` and `created_at` are assigned by storage at insert time and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Tweet {
    pub id: i64,
    pub message: String,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

impl Tweet {
    /// Creates a new Tweet instance.
    pub fn new(id: i64, message: String, tag: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            message,
            tag,
            created_at,
        }
    }
}
