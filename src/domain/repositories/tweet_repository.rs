//! Repository trait for tweet storage and aggregation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{MonthlyAggregate, Tweet, YearlyAggregate};
use crate::error::DomainError;

/// Persistence contract required by [`crate::application::services::TwitterService`].
///
/// Every method is a single storage round trip. Implementations must be safe
/// to call concurrently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTweetRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryTweetRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Inserts one tweet and returns its newly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] of kind `Internal` on any persistence failure.
    async fn create(&self, message: &str, tag: &str) -> Result<i64, DomainError>;

    /// Fetches a tweet by identifier.
    ///
    /// # Errors
    ///
    /// Returns a `Missing` error if no tweet has this identifier.
    /// Returns an `Internal` error on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Tweet, DomainError>;

    /// Lists tweets carrying `tag`, in insertion order.
    ///
    /// Never returns `Missing`; an unknown tag yields an empty page.
    ///
    /// # Errors
    ///
    /// Returns an `Internal` error on database errors.
    async fn list_by_tag(
        &self,
        tag: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Tweet>, DomainError>;

    /// Counts tweets per calendar year for `from..=to`, ascending by year.
    ///
    /// # Errors
    ///
    /// Returns an `Internal` error on database errors.
    async fn aggregate_by_year(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<YearlyAggregate>, DomainError>;

    /// Counts tweets per calendar month for `from..=to`, ascending by
    /// `(year, month)`.
    ///
    /// # Errors
    ///
    /// Returns an `Internal` error on database errors.
    async fn aggregate_by_month(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MonthlyAggregate>, DomainError>;

    /// Verifies that the storage backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns an `Internal` error if the backend cannot be reached.
    async fn ping(&self) -> Result<(), DomainError>;
}
