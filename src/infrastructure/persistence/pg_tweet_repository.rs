//! PostgreSQL implementation of the tweet repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{MonthlyAggregate, Tweet, YearlyAggregate};
use crate::domain::repositories::TweetRepository;
use crate::error::DomainError;

/// PostgreSQL repository for tweets.
///
/// Each method runs one statement on a pooled connection. Dropping the
/// returned future cancels the statement and releases the connection.
pub struct PgTweetRepository {
    pool: Arc<PgPool>,
}

impl PgTweetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetRepository for PgTweetRepository {
    async fn create(&self, message: &str, tag: &str) -> Result<i64, DomainError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO tweets (message, tag)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(message)
        .bind(tag)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Tweet, DomainError> {
        sqlx::query_as::<_, Tweet>(
            r#"
            SELECT id, message, tag, created_at
            FROM tweets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| DomainError::missing(format!("found no tweet with id {id}")))
    }

    async fn list_by_tag(
        &self,
        tag: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Tweet>, DomainError> {
        let tweets = sqlx::query_as::<_, Tweet>(
            r#"
            SELECT id, message, tag, created_at
            FROM tweets
            WHERE tag = $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(tag)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(tweets)
    }

    async fn aggregate_by_year(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<YearlyAggregate>, DomainError> {
        let rows = sqlx::query_as::<_, YearlyAggregate>(
            r#"
            SELECT
                EXTRACT(YEAR FROM created_at AT TIME ZONE 'UTC')::INT AS year,
                COUNT(id) AS tweets
            FROM tweets
            WHERE created_at BETWEEN $1 AND $2
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn aggregate_by_month(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MonthlyAggregate>, DomainError> {
        let rows = sqlx::query_as::<_, MonthlyAggregate>(
            r#"
            SELECT
                EXTRACT(YEAR FROM created_at AT TIME ZONE 'UTC')::INT AS year,
                EXTRACT(MONTH FROM created_at AT TIME ZONE 'UTC')::INT AS month,
                COUNT(id) AS tweets
            FROM tweets
            WHERE created_at BETWEEN $1 AND $2
            GROUP BY 1, 2
            ORDER BY 1 ASC, 2 ASC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
