//! PostgreSQL End-to-End Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Each test writes balances under its own custom field name so that sweeps
//! never touch rows owned by another test.
//!
//! Run with: cargo test -p integration-tests --test pg_tests

use credit_common::{hash_api_key, AppConfig};
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use sqlx::PgPool;

struct Fixture {
    pool: PgPool,
    field: String,
    base_user: i64,
}

impl Fixture {
    async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
        let pool = PgPool::connect(&url).await.expect("Failed to connect");
        ensure_schema(&pool).await;

        let suffix = unique_suffix();
        let process = i64::from(std::process::id()) % 10_000;
        Self {
            pool,
            field: format!("credit_balance_e2e_{process}_{suffix}"),
            base_user: 800_000_000 + process * 10_000 + i64::try_from(suffix).unwrap_or(0) * 10,
        }
    }

    fn config(&self) -> AppConfig {
        let mut config = test_config();
        config.ledger.balance_field = self.field.clone();
        config
    }

    fn user(&self, offset: i64) -> i64 {
        self.base_user + offset
    }

    async fn insert_balance(&self, offset: i64, value: &str) {
        sqlx::query("INSERT INTO user_custom_fields (user_id, name, value) VALUES ($1::int4, $2, $3)")
            .bind(i32::try_from(self.user(offset)).expect("user id fits int4"))
            .bind(&self.field)
            .bind(value)
            .execute(&self.pool)
            .await
            .expect("insert balance");
    }

    async fn insert_post(&self, offset: i64, created: &str, like_count: i32) {
        sqlx::query(
            "INSERT INTO posts (user_id, created_at, like_score, like_count) VALUES ($1::int4, $2::timestamp, 0, $3)",
        )
        .bind(i32::try_from(self.user(offset)).expect("user id fits int4"))
        .bind(created)
        .bind(like_count)
        .execute(&self.pool)
        .await
        .expect("insert post");
    }

    async fn value_of(&self, offset: i64) -> Option<String> {
        sqlx::query_scalar::<_, Option<String>>(
            "SELECT value FROM user_custom_fields WHERE name = $1 AND user_id = $2::int4",
        )
        .bind(&self.field)
        .bind(i32::try_from(self.user(offset)).expect("user id fits int4"))
        .fetch_optional(&self.pool)
        .await
        .expect("read balance")
        .flatten()
    }
}

async fn ensure_schema(pool: &PgPool) {
    for ddl in [
        r"CREATE TABLE IF NOT EXISTS user_custom_fields (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL,
            name VARCHAR(256) NOT NULL,
            value TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'UTC'),
            updated_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'UTC')
        )",
        r"CREATE TABLE IF NOT EXISTS posts (
            id SERIAL PRIMARY KEY,
            user_id INTEGER,
            created_at TIMESTAMP NOT NULL,
            like_score DOUBLE PRECISION NOT NULL DEFAULT 0,
            like_count INTEGER NOT NULL DEFAULT 0
        )",
        r"CREATE TABLE IF NOT EXISTS api_keys (
            id SERIAL PRIMARY KEY,
            key_hash VARCHAR NOT NULL,
            revoked_at TIMESTAMP
        )",
    ] {
        sqlx::query(ddl).execute(pool).await.expect("create schema");
    }
}

#[tokio::test]
async fn test_mean_and_flat_add_against_database() {
    if !check_test_env() {
        return;
    }

    let fixture = Fixture::new().await;
    fixture.insert_balance(0, "50").await;
    fixture.insert_balance(1, "30").await;

    let server = TestServer::start_with_database(fixture.config())
        .await
        .expect("Failed to start server");

    let response = server.get_with_key("/credits", TEST_API_KEY).await.unwrap();
    let mean: Option<f64> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mean, Some(40.0));

    let response = server
        .put_json("/credits", TEST_API_KEY, &AmountBody::number(60.0))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(fixture.value_of(0).await.as_deref(), Some("110.0"));
    assert_eq!(fixture.value_of(1).await.as_deref(), Some("90.0"));
}

#[tokio::test]
async fn test_rewards_against_database() {
    if !check_test_env() {
        return;
    }

    let fixture = Fixture::new().await;
    fixture.insert_balance(0, "20").await;
    fixture.insert_balance(1, "99").await;
    fixture.insert_balance(2, "42").await;
    for offset in [0, 1] {
        fixture.insert_post(offset, "2024-05-01 09:15:00", 4).await;
        fixture.insert_post(offset, "2024-05-01 21:40:00", 6).await;
    }

    let server = TestServer::start_with_database(fixture.config())
        .await
        .expect("Failed to start server");

    let response = server
        .put_json("/credits/rewards", TEST_API_KEY, &RewardBody::on(1.0, "2024-05-01"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(fixture.value_of(0).await.as_deref(), Some("65.0"));
    assert_eq!(fixture.value_of(1).await.as_deref(), Some("100.0"));
    assert_eq!(fixture.value_of(2).await.as_deref(), Some("42.0"));
}

#[tokio::test]
async fn test_database_api_keys() {
    if !check_test_env() {
        return;
    }

    let fixture = Fixture::new().await;
    fixture.insert_balance(0, "10").await;

    let key = format!("e2e-key-{}", fixture.field);
    sqlx::query("INSERT INTO api_keys (key_hash) VALUES ($1)")
        .bind(hash_api_key(&key))
        .execute(&fixture.pool)
        .await
        .expect("insert api key");

    let mut config = fixture.config();
    config.auth.static_keys.clear();
    let server = TestServer::start_with_database(config)
        .await
        .expect("Failed to start server");

    let response = server.get_with_key("/credits", &key).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // static test key is not in the table
    let response = server.get_with_key("/credits", TEST_API_KEY).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_readiness_against_database() {
    if !check_test_env() {
        return;
    }

    let fixture = Fixture::new().await;
    let server = TestServer::start_with_database(fixture.config())
        .await
        .expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
