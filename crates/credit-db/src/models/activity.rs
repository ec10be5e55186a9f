//! Post activity aggregate model

use sqlx::FromRow;

/// Aggregated `posts` row for one user and reference date
#[derive(Debug, Clone, FromRow)]
pub struct ActivityModel {
    pub polarization_score: f64,
    pub posts_on_date: i64,
    pub likes_on_date: i64,
}
