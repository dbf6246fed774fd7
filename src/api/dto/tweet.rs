//! DTOs for tweet creation and retrieval.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Tweet;

/// Body of `POST /tweets`.
///
/// Missing fields deserialize as empty strings and are rejected by the
/// service with a field-specific message.
#[derive(Debug, Deserialize)]
pub struct CreateTweetRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub tag: String,
}

/// A tweet as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetResponse {
    pub id: i64,
    pub message: String,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

impl From<Tweet> for TweetResponse {
    fn from(tweet: Tweet) -> Self {
        Self {
            id: tweet.id,
            message: tweet.message,
            tag: tweet.tag,
            created_at: tweet.created_at,
        }
    }
}
