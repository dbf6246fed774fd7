mod common;

use serde_json::{Value, json};
use simple_twitter::domain::entities::{AggregatedTweets, GroupBy, YearlyAggregate};

async fn seed(repository: &simple_twitter::infrastructure::persistence::MemoryTweetRepository) {
    repository.insert_at("a", "t", common::at(2023, 12, 31)).await;
    repository.insert_at("b", "t", common::at(2025, 6, 1)).await;
    repository.insert_at("c", "t", common::at(2024, 2, 10)).await;
    repository.insert_at("d", "u", common::at(2024, 2, 20)).await;
    repository.insert_at("e", "u", common::at(2024, 11, 5)).await;
    repository.insert_at("f", "t", common::at(2026, 1, 1)).await;
}

#[tokio::test]
async fn test_aggregate_by_year() {
    let (server, repository) = common::make_server();
    seed(&repository).await;

    let response = server
        .get("/tweets/_aggregate")
        .add_query_param("group_by", "year")
        .add_query_param("from", "2024-01-01")
        .add_query_param("to", "2025-12-31")
        .await;

    response.assert_status_ok();

    let result = response.json::<AggregatedTweets>();
    assert_eq!(result.group_by(), GroupBy::Year);
    assert_eq!(
        result,
        AggregatedTweets::Year(vec![
            YearlyAggregate { year: 2024, tweets: 3 },
            YearlyAggregate { year: 2025, tweets: 1 },
        ])
    );
}

#[tokio::test]
async fn test_aggregate_by_month() {
    let (server, repository) = common::make_server();
    seed(&repository).await;

    let response = server
        .get("/tweets/_aggregate")
        .add_query_param("group_by", "month")
        .add_query_param("from", "2024-01-01")
        .add_query_param("to", "2024-12-31")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "group_by": "month",
            "aggregates": [
                { "year": 2024, "month": 2, "tweets": 2 },
                { "year": 2024, "month": 11, "tweets": 1 }
            ]
        })
    );
}

#[tokio::test]
async fn test_aggregate_to_includes_whole_day() {
    let (server, repository) = common::make_server();
    repository.insert_at("late", "t", common::at(2024, 3, 14)).await;

    let response = server
        .get("/tweets/_aggregate")
        .add_query_param("group_by", "year")
        .add_query_param("from", "2024-03-14")
        .add_query_param("to", "2024-03-14")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<AggregatedTweets>().total(), 1);
}

#[tokio::test]
async fn test_aggregate_empty_range() {
    let (server, repository) = common::make_server();
    seed(&repository).await;

    let response = server
        .get("/tweets/_aggregate")
        .add_query_param("group_by", "month")
        .add_query_param("from", "2030-01-01")
        .add_query_param("to", "2030-12-31")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "group_by": "month", "aggregates": [] })
    );
}

#[tokio::test]
async fn test_aggregate_from_after_to() {
    let (server, _) = common::make_server();

    let response = server
        .get("/tweets/_aggregate")
        .add_query_param("group_by", "year")
        .add_query_param("from", "2025-01-01")
        .add_query_param("to", "2024-01-01")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["kind"], "invalid");
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("from"));
    assert!(message.contains("to"));
}

#[tokio::test]
async fn test_aggregate_unknown_group_by() {
    let (server, _) = common::make_server();

    let response = server
        .get("/tweets/_aggregate")
        .add_query_param("group_by", "week")
        .add_query_param("from", "2024-01-01")
        .add_query_param("to", "2024-12-31")
        .await;

    response.assert_status_bad_request();
    assert!(
        response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .contains("group_by")
    );
}

#[tokio::test]
async fn test_aggregate_missing_and_malformed_dates() {
    let (server, _) = common::make_server();

    let response = server
        .get("/tweets/_aggregate")
        .add_query_param("group_by", "year")
        .add_query_param("to", "2024-12-31")
        .await;
    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "`from` is required");

    let response = server
        .get("/tweets/_aggregate")
        .add_query_param("group_by", "year")
        .add_query_param("from", "2024-01-01")
        .add_query_param("to", "31/12/2024")
        .await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "`to` must be a valid date (YYYY-MM-DD)"
    );
}
