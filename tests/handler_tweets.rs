mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use simple_twitter::api::dto::tweet::TweetResponse;
use simple_twitter::application::services::TweetPolicy;

#[tokio::test]
async fn test_create_tweet_success() {
    let (server, repository) = common::make_server();

    let response = server
        .post("/tweets")
        .json(&json!({ "message": "hello world", "tag": "greetings" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let tweet = response.json::<TweetResponse>();
    assert!(tweet.id > 0);
    assert_eq!(tweet.message, "hello world");
    assert_eq!(tweet.tag, "greetings");
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_create_tweet_message_too_long() {
    let (server, repository) = common::make_server();

    let response = server
        .post("/tweets")
        .json(&json!({ "message": "a".repeat(141), "tag": "x" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["kind"], "invalid");
    assert!(json["message"].as_str().unwrap().contains("140"));
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_create_tweet_counts_code_points() {
    let (server, _) = common::make_server();

    let response = server
        .post("/tweets")
        .json(&json!({ "message": "é".repeat(140), "tag": "unicode" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_tweet_tag_limit_is_bytes() {
    let (server, _) = common::make_server();

    let response = server
        .post("/tweets")
        .json(&json!({ "message": "hi", "tag": "é".repeat(17) }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert!(json["message"].as_str().unwrap().contains("tag"));
}

#[tokio::test]
async fn test_create_tweet_empty_fields() {
    let (server, _) = common::make_server();

    for body in [
        json!({ "message": "", "tag": "t" }),
        json!({ "message": "hi", "tag": "" }),
        json!({ "tag": "t" }),
    ] {
        let response = server.post("/tweets").json(&body).await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["kind"], "invalid");
    }
}

#[tokio::test]
async fn test_create_tweet_malformed_body() {
    let (server, _) = common::make_server();

    let response = server
        .post("/tweets")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["kind"], "invalid");
    assert_eq!(json["message"], "failed to parse request body");
}

#[tokio::test]
async fn test_create_tweet_respects_configured_limit() {
    let policy = TweetPolicy {
        max_message_length: 160,
        ..TweetPolicy::default()
    };
    let (server, _) = common::make_server_with_policy(policy);

    let response = server
        .post("/tweets")
        .json(&json!({ "message": "a".repeat(150), "tag": "long" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_list_tweets_by_tag() {
    let (server, _) = common::make_server();

    for i in 0..3 {
        server
            .post("/tweets")
            .json(&json!({ "message": format!("rust {i}"), "tag": "rust" }))
            .await
            .assert_status(StatusCode::CREATED);
    }
    server
        .post("/tweets")
        .json(&json!({ "message": "gopher", "tag": "go" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/tweets").add_query_param("tag", "rust").await;

    response.assert_status_ok();

    let tweets = response.json::<Vec<TweetResponse>>();
    let messages: Vec<&str> = tweets.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["rust 0", "rust 1", "rust 2"]);
}

#[tokio::test]
async fn test_list_tweets_pagination() {
    let (server, _) = common::make_server();

    for i in 0..5 {
        server
            .post("/tweets")
            .json(&json!({ "message": format!("m{i}"), "tag": "page" }))
            .await;
    }

    let response = server
        .get("/tweets")
        .add_query_param("tag", "page")
        .add_query_param("offset", 1)
        .add_query_param("limit", 2)
        .await;

    response.assert_status_ok();

    let tweets = response.json::<Vec<TweetResponse>>();
    let messages: Vec<&str> = tweets.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["m1", "m2"]);
}

#[tokio::test]
async fn test_list_tweets_limit_is_capped() {
    let policy = TweetPolicy {
        max_page_size: 3,
        ..TweetPolicy::default()
    };
    let (server, repository) = common::make_server_with_policy(policy);

    for i in 0..5 {
        repository
            .insert_at(&format!("m{i}"), "cap", common::at(2025, 1, 1))
            .await;
    }

    let response = server
        .get("/tweets")
        .add_query_param("tag", "cap")
        .add_query_param("limit", 100)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<TweetResponse>>().len(), 3);
}

#[tokio::test]
async fn test_list_tweets_without_tag_is_empty() {
    let (server, repository) = common::make_server();
    repository.insert_at("hi", "t", common::at(2025, 1, 1)).await;

    let response = server.get("/tweets").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_tweets_invalid_offset() {
    let (server, _) = common::make_server();

    let response = server
        .get("/tweets")
        .add_query_param("tag", "t")
        .add_query_param("offset", "ten")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "`offset` must be an integer value");

    let response = server
        .get("/tweets")
        .add_query_param("tag", "t")
        .add_query_param("offset", -1)
        .await;

    response.assert_status_bad_request();
    assert!(
        response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .contains("offset")
    );
}

#[tokio::test]
async fn test_list_tweets_negative_limit() {
    let (server, _) = common::make_server();

    let response = server
        .get("/tweets")
        .add_query_param("tag", "t")
        .add_query_param("limit", -5)
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["kind"], "invalid");
}

#[tokio::test]
async fn test_get_tweet() {
    let (server, _) = common::make_server();

    let created = server
        .post("/tweets")
        .json(&json!({ "message": "find me", "tag": "t" }))
        .await
        .json::<TweetResponse>();

    let response = server.get(&format!("/tweets/{}", created.id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<TweetResponse>(), created);
}

#[tokio::test]
async fn test_get_tweet_not_found() {
    let (server, _) = common::make_server();

    let response = server.get("/tweets/42").await;

    response.assert_status_not_found();

    let json = response.json::<Value>();
    assert_eq!(json["kind"], "missing");
    assert!(json["message"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn test_get_tweet_invalid_id() {
    let (server, _) = common::make_server();

    let response = server.get("/tweets/abc").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["kind"], "invalid");
}

#[tokio::test]
async fn test_storage_failure_is_internal() {
    let server = common::make_unreachable_server();

    let response = server
        .post("/tweets")
        .json(&json!({ "message": "hi", "tag": "t" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_eq!(json["kind"], "internal");
    assert_eq!(json["message"], "failed to create tweet");

    let response = server.get("/tweets").add_query_param("tag", "t").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["message"], "failed to list tweets");
}
