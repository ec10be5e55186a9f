//! API Integration Tests
//!
//! Serve the real router over loopback, backed by the in-memory store and a
//! static API key. No external services required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::{
    assert_error_code, assert_json, assert_status, fixtures::*, test_config, InMemoryLedgerStore,
    TestServer, API_KEY,
};
use reqwest::StatusCode;
use serde_json::Value;

async fn start(store: &Arc<InMemoryLedgerStore>) -> TestServer {
    TestServer::start_in_memory(store.clone())
        .await
        .expect("Failed to start server")
}

fn seeded_store() -> Arc<InMemoryLedgerStore> {
    let store = Arc::new(InMemoryLedgerStore::new());
    store.insert_balance(1, "50");
    store.insert_balance(2, "30");
    store
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = start(&seeded_store()).await;
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = start(&seeded_store()).await;
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_health_not_ready_when_store_is_down() {
    let store = seeded_store();
    store.set_healthy(false);
    let server = start(&store).await;

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["status"], "not_ready");
}

// ============================================================================
// Access Tests
// ============================================================================

#[tokio::test]
async fn test_missing_api_key_is_rejected() {
    let server = start(&seeded_store()).await;
    let response = server.get("/credits").await.unwrap();
    let code = assert_error_code(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "INVALID_ACCESS");
}

#[tokio::test]
async fn test_unknown_api_key_leaves_balances_alone() {
    let store = seeded_store();
    let server = start(&store).await;

    let response = server
        .put_json("/credits", "not-the-key", &AmountBody::number(10.0))
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::FORBIDDEN).await.unwrap();

    assert_eq!(code, "INVALID_ACCESS");
    assert_eq!(store.value_of(1).as_deref(), Some("50"));
}

#[tokio::test]
async fn test_key_is_checked_before_parameters() {
    let server = start(&seeded_store()).await;
    let response = server.put_with_key("/credits", "").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_disabled_system_answers_not_found() {
    let store = seeded_store();
    let mut config = test_config();
    config.ledger.enabled = false;
    let server = TestServer::start_in_memory_with_config(store.clone(), config)
        .await
        .unwrap();

    let response = server.get_with_key("/credits", TEST_API_KEY).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put_json("/credits", TEST_API_KEY, &AmountBody::number(10.0))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(store.value_of(1).as_deref(), Some("50"));

    // health routes stay up and report the switch
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["ledger"], "disabled");
}

// ============================================================================
// Mean Tests
// ============================================================================

#[tokio::test]
async fn test_get_mean() {
    let server = start(&seeded_store()).await;
    let response = server.get_with_key("/credits", TEST_API_KEY).await.unwrap();
    let mean: Option<f64> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mean, Some(40.0));
}

#[tokio::test]
async fn test_get_mean_without_balances_is_null() {
    let server = start(&Arc::new(InMemoryLedgerStore::new())).await;
    let response = server.get_with_key("/credits", TEST_API_KEY).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.is_null());
}

// ============================================================================
// Flat Add Tests
// ============================================================================

#[tokio::test]
async fn test_put_credits_with_json_body() {
    let store = seeded_store();
    let server = start(&store).await;

    let response = server
        .put_json("/credits", TEST_API_KEY, &AmountBody::number(60.0))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(store.value_of(1).as_deref(), Some("110.0"));
    assert_eq!(store.value_of(2).as_deref(), Some("90.0"));
}

#[tokio::test]
async fn test_put_credits_with_query_string() {
    let store = seeded_store();
    let server = start(&store).await;

    let response = server
        .put_with_key("/credits?amount=12.5", TEST_API_KEY)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(store.value_of(1).as_deref(), Some("62.5"));
}

#[tokio::test]
async fn test_put_credits_with_form_body() {
    let store = seeded_store();
    let server = start(&store).await;

    let response = server
        .put_with("/credits", |req| {
            req.header(API_KEY, TEST_API_KEY)
                .header("content-type", "application/x-www-form-urlencoded")
                .body("amount=-10")
        })
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(store.value_of(2).as_deref(), Some("20.0"));
}

#[tokio::test]
async fn test_body_amount_wins_over_query() {
    let store = seeded_store();
    let server = start(&store).await;

    let response = server
        .put_json("/credits?amount=1000", TEST_API_KEY, &AmountBody::text("5"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(store.value_of(1).as_deref(), Some("55.0"));
}

#[tokio::test]
async fn test_put_credits_without_amount() {
    let store = seeded_store();
    let server = start(&store).await;

    let response = server.put_with_key("/credits", TEST_API_KEY).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"].is_string());
    assert_eq!(store.value_of(1).as_deref(), Some("50"));
}

#[tokio::test]
async fn test_put_credits_with_blank_amount() {
    let store = seeded_store();
    let server = start(&store).await;

    let response = server
        .put_with_key("/credits?amount=", TEST_API_KEY)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(store.value_of(1).as_deref(), Some("50"));
}

#[tokio::test]
async fn test_put_credits_with_malformed_json() {
    let server = start(&seeded_store()).await;

    let response = server
        .put_with("/credits", |req| {
            req.header(API_KEY, TEST_API_KEY)
                .header("content-type", "application/json")
                .body("{amount:")
        })
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");
}

// ============================================================================
// Reward Tests
// ============================================================================

#[tokio::test]
async fn test_put_rewards_for_date() {
    let store = seeded_store();
    store.insert_post(2, "2024-05-01 08:00:00", 0.0, 7);
    store.insert_post(2, "2024-05-01 18:30:00", 0.0, 3);
    let server = start(&store).await;

    let response = server
        .put_json("/credits/rewards", TEST_API_KEY, &RewardBody::on(1.0, "2024-05-01"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // no posts: unchanged; 30 + 45 = 75
    assert_eq!(store.value_of(1).as_deref(), Some("50.0"));
    assert_eq!(store.value_of(2).as_deref(), Some("75.0"));
}

#[tokio::test]
async fn test_put_rewards_caps_balance() {
    let store = seeded_store();
    store.insert_post(1, "2024-05-01 08:00:00", 0.0, 10);
    store.insert_post(1, "2024-05-01 09:00:00", 0.0, 0);
    let server = start(&store).await;

    let response = server
        .put_with_key("/credits/rewards?amount=1&date=2024-05-01", TEST_API_KEY)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(store.value_of(1).as_deref(), Some("95.0"));

    let response = server
        .put_with_key("/credits/rewards?amount=1&date=2024-05-01", TEST_API_KEY)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(store.value_of(1).as_deref(), Some("100.0"));
}

#[tokio::test]
async fn test_put_rewards_with_bad_date() {
    let store = seeded_store();
    let server = start(&store).await;

    let response = server
        .put_with_key("/credits/rewards?amount=1&date=yesterday", TEST_API_KEY)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(store.value_of(1).as_deref(), Some("50"));
}

#[tokio::test]
async fn test_put_rewards_without_amount() {
    let server = start(&seeded_store()).await;

    let response = server
        .put_with_key("/credits/rewards?date=2024-05-01", TEST_API_KEY)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_store_failure_hides_detail() {
    let store = seeded_store();
    store.fail_writes_for(2);
    let server = start(&store).await;

    let response = server
        .put_json("/credits", TEST_API_KEY, &AmountBody::number(1.0))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body["error"]["message"], "Internal server error");
    // the write before the failure stays committed
    assert_eq!(store.value_of(1).as_deref(), Some("51.0"));
}
