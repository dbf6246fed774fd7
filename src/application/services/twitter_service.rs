//! Tweet creation, listing and aggregation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{AggregatedTweets, GroupBy, Tweet};
use crate::domain::repositories::TweetRepository;
use crate::error::{DomainError, ErrorKind};

/// Limits enforced by [`TwitterService`].
///
/// Built from [`crate::config::Config`] at startup so tests can run with
/// other values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweetPolicy {
    /// Largest page `list_tweets` will request from storage.
    pub max_page_size: i64,
    /// Maximum message length in Unicode code points.
    pub max_message_length: usize,
    /// Maximum tag length in bytes.
    pub max_tag_length: usize,
}

impl Default for TweetPolicy {
    fn default() -> Self {
        Self {
            max_page_size: 500,
            max_message_length: 140,
            max_tag_length: 32,
        }
    }
}

/// Service enforcing tweet validation, pagination and aggregation rules.
///
/// Holds no mutable state; a single instance is shared by all requests.
pub struct TwitterService<R: TweetRepository + ?Sized = dyn TweetRepository> {
    repository: Arc<R>,
    policy: TweetPolicy,
}

impl<R: TweetRepository + ?Sized> TwitterService<R> {
    /// Creates a new twitter service.
    pub fn new(repository: Arc<R>, policy: TweetPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> TweetPolicy {
        self.policy
    }

    /// Validates and stores a new tweet.
    ///
    /// The stored row is read back so the returned tweet carries the
    /// storage-assigned `created_at`.
    ///
    /// # Errors
    ///
    /// Returns an `Invalid` error if the message or tag is empty or too long.
    /// Returns an `Internal` error if the insert or the read-back fails.
    pub async fn create_tweet(&self, message: &str, tag: &str) -> Result<Tweet, DomainError> {
        self.validate_message(message).map_err(rejected)?;
        self.validate_tag(tag).map_err(rejected)?;

        let id = self
            .repository
            .create(message, tag)
            .await
            .map_err(|e| storage_failure("failed to create tweet", e))?;

        let tweet = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| storage_failure("failed to create tweet", e))?;

        metrics::counter!("tweets_created_total").increment(1);
        tracing::debug!(id = tweet.id, tag = %tweet.tag, "tweet created");

        Ok(tweet)
    }

    /// Retrieves a tweet by identifier.
    ///
    /// # Errors
    ///
    /// Returns a `Missing` error if no tweet has this identifier.
    /// Returns an `Internal` error on storage failures.
    pub async fn get_tweet(&self, id: i64) -> Result<Tweet, DomainError> {
        self.repository.find_by_id(id).await.map_err(|e| {
            if e.kind() == ErrorKind::Missing {
                rejected(e)
            } else {
                storage_failure("failed to get tweet", e)
            }
        })
    }

    /// Lists one page of tweets carrying `tag`.
    ///
    /// An empty tag yields an empty page without querying storage. A `limit`
    /// above the configured maximum page size is capped silently.
    ///
    /// # Errors
    ///
    /// Returns an `Invalid` error if `offset` or `limit` is negative.
    /// Returns an `Internal` error on storage failures.
    pub async fn list_tweets(
        &self,
        tag: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Tweet>, DomainError> {
        if offset < 0 {
            return Err(rejected(DomainError::invalid("`offset` can't be negative")));
        }

        if limit < 0 {
            return Err(rejected(DomainError::invalid("`limit` can't be negative")));
        }

        if tag.is_empty() {
            return Ok(Vec::new());
        }

        let limit = limit.min(self.policy.max_page_size);

        self.repository
            .list_by_tag(tag, offset, limit)
            .await
            .map_err(|e| storage_failure("failed to list tweets", e))
    }

    /// Counts tweets created within `from..=to`, bucketed by `group_by`.
    ///
    /// `group_by` must be `"year"` or `"month"`. The result carries the
    /// requested grouping and buckets in ascending chronological order.
    ///
    /// # Errors
    ///
    /// Returns an `Invalid` error if either bound is unset, if `from` is after
    /// `to`, or if `group_by` is not recognized.
    /// Returns an `Internal` error on storage failures.
    pub async fn aggregate_tweets(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        group_by: &str,
    ) -> Result<AggregatedTweets, DomainError> {
        let from = from.ok_or_else(|| rejected(DomainError::invalid("`from` is required")))?;
        let to = to.ok_or_else(|| rejected(DomainError::invalid("`to` is required")))?;

        if from > to {
            return Err(rejected(DomainError::invalid(
                "`from` can't be after `to`",
            )));
        }

        match group_by.parse::<GroupBy>().map_err(rejected)? {
            GroupBy::Year => self
                .repository
                .aggregate_by_year(from, to)
                .await
                .map(AggregatedTweets::Year)
                .map_err(|e| storage_failure("failed to aggregate tweets by year", e)),
            GroupBy::Month => self
                .repository
                .aggregate_by_month(from, to)
                .await
                .map(AggregatedTweets::Month)
                .map_err(|e| storage_failure("failed to aggregate tweets by month", e)),
        }
    }

    /// Performs one storage round trip to confirm the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns an `Internal` error if storage cannot be reached.
    pub async fn check_storage(&self) -> Result<(), DomainError> {
        self.repository
            .ping()
            .await
            .map_err(|e| storage_failure("storage is unavailable", e))
    }

    fn validate_message(&self, message: &str) -> Result<(), DomainError> {
        if message.is_empty() {
            return Err(DomainError::invalid("`message` can't be empty"));
        }

        if message.chars().count() > self.policy.max_message_length {
            return Err(DomainError::invalid(format!(
                "`message` is too long, must be at most {} code points",
                self.policy.max_message_length
            )));
        }

        Ok(())
    }

    fn validate_tag(&self, tag: &str) -> Result<(), DomainError> {
        if tag.is_empty() {
            return Err(DomainError::invalid("`tag` can't be empty"));
        }

        if tag.len() > self.policy.max_tag_length {
            return Err(DomainError::invalid(format!(
                "`tag` is too long, must be at most {} bytes",
                self.policy.max_tag_length
            )));
        }

        Ok(())
    }
}

/// Records a client-caused rejection and passes the error through.
fn rejected(e: DomainError) -> DomainError {
    metrics::counter!("domain_errors_total", "kind" => e.kind().as_str()).increment(1);
    tracing::debug!(kind = %e.kind(), "{}", e.message());
    e
}

/// Wraps a storage failure as `Internal`, keeping the original as the cause.
fn storage_failure(message: &'static str, cause: DomainError) -> DomainError {
    metrics::counter!("domain_errors_total", "kind" => ErrorKind::Internal.as_str()).increment(1);
    tracing::error!(error = %cause, source = ?cause.cause(), "{message}");
    DomainError::internal(message, cause)
}
