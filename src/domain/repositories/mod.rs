//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod tweet_repository;

pub use tweet_repository::TweetRepository;

#[cfg(test)]
pub use tweet_repository::MockTweetRepository;
