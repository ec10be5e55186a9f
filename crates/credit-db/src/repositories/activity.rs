//! PostgreSQL implementation of PostActivityRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use credit_core::{ActivitySnapshot, PostActivityRepository, RepoResult, UserId};

use crate::models::ActivityModel;

use super::error::map_db_error;

/// Reads the host's `posts` table; never writes
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostActivityRepository for PgActivityRepository {
    #[instrument(skip(self))]
    async fn snapshot(&self, user_id: UserId, date: NaiveDate) -> RepoResult<ActivitySnapshot> {
        // Aggregates over zero rows still yield one row, so absent users read as neutral.
        // `created_at` is a UTC `timestamp`, so `::date` is the UTC calendar day.
        let model = sqlx::query_as::<_, ActivityModel>(
            r"
            SELECT COALESCE(AVG(ABS(like_score::float8)), 0)::float8 AS polarization_score,
                   COUNT(*) FILTER (WHERE created_at::date = $2) AS posts_on_date,
                   COALESCE(SUM(like_count) FILTER (WHERE created_at::date = $2), 0)::BIGINT
                       AS likes_on_date
            FROM posts
            WHERE user_id = $1::BIGINT
            ",
        )
        .bind(user_id.into_inner())
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into_snapshot(user_id, date))
    }
}
