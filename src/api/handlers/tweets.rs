//! Handlers for creating, listing and fetching tweets.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::dto::query::ListTweetsQuery;
use crate::api::dto::tweet::{CreateTweetRequest, TweetResponse};
use crate::error::DomainError;
use crate::state::AppState;

/// Publishes a new tweet.
///
/// # Endpoint
///
/// `POST /tweets`
///
/// # Request Body
///
/// ```json
/// { "message": "hello world", "tag": "greetings" }
/// ```
///
/// # Response
///
/// **201 Created** with the stored tweet:
///
/// ```json
/// {
///   "id": 1,
///   "message": "hello world",
///   "tag": "greetings",
///   "created_at": "2025-03-14T16:44:10Z"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: body is not valid JSON, or message/tag is empty or too long
/// - **500 Internal Server Error**: storage failure
pub async fn create_tweet_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateTweetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TweetResponse>), DomainError> {
    let Json(payload) = payload.map_err(|e| {
        DomainError::invalid_with_cause("failed to parse request body", e)
    })?;

    let tweet = state
        .twitter_service
        .create_tweet(&payload.message, &payload.tag)
        .await?;

    Ok((StatusCode::CREATED, Json(tweet.into())))
}

/// Lists tweets carrying a tag, oldest first.
///
/// # Endpoint
///
/// `GET /tweets?tag=<tag>&offset=<n>&limit=<n>`
///
/// # Query Parameters
///
/// - `tag`: tag to filter on; an absent or empty tag yields `[]`
/// - `offset` (optional): tweets to skip (default: 0)
/// - `limit` (optional): page size (default: `DEFAULT_PAGE_SIZE`, capped at `MAX_PAGE_SIZE`)
///
/// # Errors
///
/// Returns 400 Bad Request if `offset` or `limit` is not a non-negative integer.
pub async fn list_tweets_handler(
    State(state): State<AppState>,
    query: Result<Query<ListTweetsQuery>, QueryRejection>,
) -> Result<Json<Vec<TweetResponse>>, DomainError> {
    let Query(query) = query
        .map_err(|e| DomainError::invalid_with_cause("failed to parse query string", e))?;

    let offset = query.offset()?;
    let limit = query.limit(state.default_page_size)?;

    let tweets = state
        .twitter_service
        .list_tweets(query.tag(), offset, limit)
        .await?;

    Ok(Json(tweets.into_iter().map(TweetResponse::from).collect()))
}

/// Fetches a single tweet.
///
/// # Endpoint
///
/// `GET /tweets/{id}`
///
/// # Errors
///
/// - **400 Bad Request**: `id` is not an integer
/// - **404 Not Found**: no tweet has this id
pub async fn get_tweet_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TweetResponse>, DomainError> {
    let Path(id) =
        id.map_err(|e| DomainError::invalid_with_cause("`id` must be an integer value", e))?;

    let tweet = state.twitter_service.get_tweet(id).await?;

    Ok(Json(tweet.into()))
}
