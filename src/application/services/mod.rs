//! Business logic services for the application layer.

pub mod twitter_service;

pub use twitter_service::{TweetPolicy, TwitterService};
