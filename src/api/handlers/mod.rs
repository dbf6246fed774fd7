//! HTTP request handlers.

pub mod aggregate;
pub mod health;
pub mod tweets;

pub use aggregate::aggregate_tweets_handler;
pub use health::health_handler;
pub use tweets::{create_tweet_handler, get_tweet_handler, list_tweets_handler};
