//! Handler for time-bucketed tweet counts.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::query::AggregateQuery;
use crate::domain::entities::AggregatedTweets;
use crate::error::DomainError;
use crate::state::AppState;

/// Counts tweets per year or per month within a date range.
///
/// # Endpoint
///
/// `GET /tweets/_aggregate?group_by=<year|month>&from=<YYYY-MM-DD>&to=<YYYY-MM-DD>`
///
/// Both bounds are inclusive whole days in UTC.
///
/// # Response
///
/// ```json
/// {
///   "group_by": "month",
///   "aggregates": [
///     { "year": 2024, "month": 11, "tweets": 38 },
///     { "year": 2024, "month": 12, "tweets": 51 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a date is missing or malformed, if `from` is
/// after `to`, or if `group_by` is not recognized.
pub async fn aggregate_tweets_handler(
    State(state): State<AppState>,
    query: Result<Query<AggregateQuery>, QueryRejection>,
) -> Result<Json<AggregatedTweets>, DomainError> {
    let Query(query) = query
        .map_err(|e| DomainError::invalid_with_cause("failed to parse query string", e))?;

    let from = query.from()?;
    let to = query.to()?;

    let result = state
        .twitter_service
        .aggregate_tweets(from, to, query.group_by())
        .await?;

    Ok(Json(result))
}
