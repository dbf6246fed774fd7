//! Time-bucketed tweet counts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of tweets created during one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(deny_unknown_fields)]
pub struct YearlyAggregate {
    pub year: i32,
    pub tweets: i64,
}

/// Number of tweets created during one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(deny_unknown_fields)]
pub struct MonthlyAggregate {
    pub year: i32,
    pub month: i32,
    pub tweets: i64,
}

/// Bucket granularity of an aggregation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Year,
    Month,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            _ => Err(DomainError::invalid(
                "`group_by` must be one of [`year`, `month`]",
            )),
        }
    }
}

/// Aggregation response.
///
/// The variant is the grouping discriminator, so the bucket shape always
/// agrees with it. On the wire the discriminator is written next to the
/// buckets:
///
/// ```json
/// { "group_by": "year", "aggregates": [{ "year": 2024, "tweets": 770 }] }
/// ```
///
/// Buckets are ascending by `year`, or by `(year, month)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "group_by", content = "aggregates", rename_all = "lowercase")]
pub enum AggregatedTweets {
    Year(Vec<YearlyAggregate>),
    Month(Vec<MonthlyAggregate>),
}

impl AggregatedTweets {
    pub fn group_by(&self) -> GroupBy {
        match self {
            Self::Year(_) => GroupBy::Year,
            Self::Month(_) => GroupBy::Month,
        }
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        match self {
            Self::Year(buckets) => buckets.len(),
            Self::Month(buckets) => buckets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of tweets across all buckets.
    pub fn total(&self) -> i64 {
        match self {
            Self::Year(buckets) => buckets.iter().map(|b| b.tweets).sum(),
            Self::Month(buckets) => buckets.iter().map(|b| b.tweets).sum(),
        }
    }
}
