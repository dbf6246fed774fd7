#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use simple_twitter::application::services::{TweetPolicy, TwitterService};
use simple_twitter::domain::entities::{MonthlyAggregate, Tweet, YearlyAggregate};
use simple_twitter::domain::repositories::TweetRepository;
use simple_twitter::error::DomainError;
use simple_twitter::infrastructure::persistence::MemoryTweetRepository;
use simple_twitter::routes::router;
use simple_twitter::state::AppState;
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: i64 = 50;

pub fn create_test_state(repository: Arc<dyn TweetRepository>, policy: TweetPolicy) -> AppState {
    let service = Arc::new(TwitterService::new(repository, policy));
    AppState::new(service, DEFAULT_PAGE_SIZE)
}

/// Test server over an in-memory store, returned alongside the store so
/// tests can load historical tweets.
pub fn make_server() -> (TestServer, Arc<MemoryTweetRepository>) {
    make_server_with_policy(TweetPolicy::default())
}

pub fn make_server_with_policy(policy: TweetPolicy) -> (TestServer, Arc<MemoryTweetRepository>) {
    let repository = Arc::new(MemoryTweetRepository::new());
    let state = create_test_state(repository.clone(), policy);

    (TestServer::new(router(state)).unwrap(), repository)
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// Repository whose every call fails as an unreachable backend would.
pub struct UnreachableRepository;

fn unreachable() -> DomainError {
    DomainError::internal(
        "database error",
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
    )
}

#[async_trait]
impl TweetRepository for UnreachableRepository {
    async fn create(&self, _message: &str, _tag: &str) -> Result<i64, DomainError> {
        Err(unreachable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Tweet, DomainError> {
        Err(unreachable())
    }

    async fn list_by_tag(
        &self,
        _tag: &str,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<Tweet>, DomainError> {
        Err(unreachable())
    }

    async fn aggregate_by_year(
        &self,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<Vec<YearlyAggregate>, DomainError> {
        Err(unreachable())
    }

    async fn aggregate_by_month(
        &self,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<Vec<MonthlyAggregate>, DomainError> {
        Err(unreachable())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Err(unreachable())
    }
}

pub fn make_unreachable_server() -> TestServer {
    let state = create_test_state(Arc::new(UnreachableRepository), TweetPolicy::default());
    TestServer::new(router(state)).unwrap()
}
