//! In-process implementation of the tweet repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::{MonthlyAggregate, Tweet, YearlyAggregate};
use crate::domain::repositories::TweetRepository;
use crate::error::DomainError;

/// Tweet storage kept in memory for the lifetime of the process.
///
/// Used with `STORAGE=memory` and as the backend of the HTTP tests.
/// Identifiers start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryTweetRepository {
    tweets: RwLock<Vec<Tweet>>,
}

impl MemoryTweetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tweet with an explicit creation time and returns its id.
    ///
    /// Lets callers load historical data that `create` cannot express.
    pub async fn insert_at(&self, message: &str, tag: &str, created_at: DateTime<Utc>) -> i64 {
        let mut tweets = self.tweets.write().await;
        let id = tweets.len() as i64 + 1;

        tweets.push(Tweet::new(id, message.to_string(), tag.to_string(), created_at));

        id
    }

    pub async fn len(&self) -> usize {
        self.tweets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Counts tweets with `from <= created_at <= to`, grouped by `key`.
fn count_by<K: Ord>(
    tweets: &[Tweet],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    key: impl Fn(&DateTime<Utc>) -> K,
) -> BTreeMap<K, i64> {
    let mut counts = BTreeMap::new();

    for tweet in tweets
        .iter()
        .filter(|t| t.created_at >= from && t.created_at <= to)
    {
        *counts.entry(key(&tweet.created_at)).or_insert(0) += 1;
    }

    counts
}

#[async_trait]
impl TweetRepository for MemoryTweetRepository {
    async fn create(&self, message: &str, tag: &str) -> Result<i64, DomainError> {
        Ok(self.insert_at(message, tag, Utc::now()).await)
    }

    async fn find_by_id(&self, id: i64) -> Result<Tweet, DomainError> {
        let tweets = self.tweets.read().await;

        id.checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| tweets.get(idx))
            .cloned()
            .ok_or_else(|| DomainError::missing(format!("found no tweet with id {id}")))
    }

    async fn list_by_tag(
        &self,
        tag: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Tweet>, DomainError> {
        let tweets = self.tweets.read().await;

        Ok(tweets
            .iter()
            .filter(|t| t.tag == tag)
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn aggregate_by_year(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<YearlyAggregate>, DomainError> {
        let counts = count_by(&self.tweets.read().await, from, to, |at| at.year());

        Ok(counts
            .into_iter()
            .map(|(year, tweets)| YearlyAggregate { year, tweets })
            .collect())
    }

    async fn aggregate_by_month(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MonthlyAggregate>, DomainError> {
        let counts = count_by(&self.tweets.read().await, from, to, |at| {
            (at.year(), at.month() as i32)
        });

        Ok(counts
            .into_iter()
            .map(|((year, month), tweets)| MonthlyAggregate {
                year,
                month,
                tweets,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
