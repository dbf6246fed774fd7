//! API route configuration.

use crate::api::handlers::{
    aggregate_tweets_handler, create_tweet_handler, get_tweet_handler, list_tweets_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Tweet routes.
///
/// # Endpoints
///
/// - `POST /tweets`            - Publish a tweet
/// - `GET  /tweets`            - List tweets by tag (paginated)
/// - `GET  /tweets/_aggregate` - Tweet counts per year or month
/// - `GET  /tweets/{id}`       - Fetch a single tweet
pub fn tweet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tweets",
            get(list_tweets_handler).post(create_tweet_handler),
        )
        .route("/tweets/_aggregate", get(aggregate_tweets_handler))
        .route("/tweets/{id}", get(get_tweet_handler))
}
