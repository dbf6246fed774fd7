//! Query string parameters for listing and aggregation.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::Deserialize;

use crate::error::DomainError;

/// Query parameters of `GET /tweets`.
#[derive(Debug, Default, Deserialize)]
pub struct ListTweetsQuery {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl ListTweetsQuery {
    /// Tag to filter on; absent means empty.
    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or_default()
    }

    /// Parsed `offset`, `0` when absent.
    ///
    /// Range checks are left to the service.
    pub fn offset(&self) -> Result<i64, DomainError> {
        parse_integer("offset", self.offset.as_deref(), 0)
    }

    /// Parsed `limit`, `default` when absent.
    pub fn limit(&self, default: i64) -> Result<i64, DomainError> {
        parse_integer("limit", self.limit.as_deref(), default)
    }
}

/// Query parameters of `GET /tweets/_aggregate`.
///
/// Dates use the `YYYY-MM-DD` form and are interpreted in UTC.
#[derive(Debug, Default, Deserialize)]
pub struct AggregateQuery {
    #[serde(default)]
    pub group_by: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl AggregateQuery {
    pub fn group_by(&self) -> &str {
        self.group_by.as_deref().unwrap_or_default()
    }

    /// First instant of the `from` day.
    pub fn from(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
        self.from
            .as_deref()
            .map(|raw| parse_date("from", raw).map(start_of_day))
            .transpose()
    }

    /// Last instant of the `to` day, so the whole day is counted.
    pub fn to(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
        self.to
            .as_deref()
            .map(|raw| {
                parse_date("to", raw).and_then(|date| {
                    end_of_day(date).ok_or_else(|| {
                        DomainError::invalid("`to` must be a valid date (YYYY-MM-DD)")
                    })
                })
            })
            .transpose()
    }
}

fn parse_integer(field: &str, raw: Option<&str>, default: i64) -> Result<i64, DomainError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e| {
            DomainError::invalid_with_cause(format!("`{field}` must be an integer value"), e)
        }),
    }
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        DomainError::invalid_with_cause(
            format!("`{field}` must be a valid date (YYYY-MM-DD)"),
            e,
        )
    })
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    start_of_day(date.succ_opt()?).checked_sub_signed(TimeDelta::microseconds(1))
}
