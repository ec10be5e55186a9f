//! PostgreSQL implementation of BalanceRepository
//!
//! Balances live in the host's `user_custom_fields` table, whose `id` and
//! `user_id` are `integer` and whose timestamps are `timestamp without time
//! zone` holding UTC. Queries widen and convert at the boundary.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use credit_core::{format_balance, parse_lenient_f64, BalanceRecord, BalanceRepository, RepoResult, UserId};

use crate::models::BalanceModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BalanceRepository
#[derive(Clone)]
pub struct PgBalanceRepository {
    pool: PgPool,
}

impl PgBalanceRepository {
    /// Create a new PgBalanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BalanceRepository for PgBalanceRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, field: &str) -> RepoResult<Vec<BalanceRecord>> {
        let rows = sqlx::query_as::<_, BalanceModel>(
            r"
            SELECT id::BIGINT AS id, user_id::BIGINT AS user_id, name, value,
                   (updated_at AT TIME ZONE 'UTC') AS updated_at
            FROM user_custom_fields
            WHERE name = $1
            ORDER BY id
            ",
        )
        .bind(field)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(BalanceRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, field: &str, user_id: UserId) -> RepoResult<Option<BalanceRecord>> {
        let row = sqlx::query_as::<_, BalanceModel>(
            r"
            SELECT id::BIGINT AS id, user_id::BIGINT AS user_id, name, value,
                   (updated_at AT TIME ZONE 'UTC') AS updated_at
            FROM user_custom_fields
            WHERE name = $1 AND user_id = $2::BIGINT
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(field)
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(BalanceRecord::from))
    }

    /// Values are decoded leniently, so a non-numeric row counts as zero
    /// instead of failing the whole aggregate. NULL values are skipped, as
    /// `AVG` skips them.
    #[instrument(skip(self))]
    async fn mean(&self, field: &str) -> RepoResult<Option<f64>> {
        let values = sqlx::query_scalar::<_, Option<String>>(
            r"
            SELECT value
            FROM user_custom_fields
            WHERE name = $1
            ",
        )
        .bind(field)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let parsed: Vec<f64> = values
            .iter()
            .flatten()
            .map(|v| parse_lenient_f64(v))
            .collect();

        if parsed.is_empty() {
            return Ok(None);
        }

        Ok(Some(parsed.iter().sum::<f64>() / parsed.len() as f64))
    }

    #[instrument(skip(self))]
    async fn update_balance(&self, field: &str, user_id: UserId, balance: f64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE user_custom_fields
            SET value = $3, updated_at = (NOW() AT TIME ZONE 'UTC')
            WHERE name = $1 AND user_id = $2::BIGINT
            ",
        )
        .bind(field)
        .bind(user_id.into_inner())
        .bind(format_balance(balance))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
