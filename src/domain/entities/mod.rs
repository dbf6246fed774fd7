//! Core domain entities.
//!
//! - [`Tweet`] - A posted message with its tag and creation time
//! - [`AggregatedTweets`] - Tweet counts bucketed by year or by month

pub mod aggregate;
pub mod tweet;

pub use aggregate::{AggregatedTweets, GroupBy, MonthlyAggregate, YearlyAggregate};
pub use tweet::Tweet;
