//! Tweet repository implementations.
//!
//! - [`PgTweetRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryTweetRepository`] - In-process storage for tests and local runs

pub mod memory_tweet_repository;
pub mod pg_tweet_repository;

pub use memory_tweet_repository::MemoryTweetRepository;
pub use pg_tweet_repository::PgTweetRepository;
