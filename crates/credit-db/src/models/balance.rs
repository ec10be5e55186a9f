//! Balance database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of `user_custom_fields` holding a credit balance
#[derive(Debug, Clone, FromRow)]
pub struct BalanceModel {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    /// Nullable in the host schema
    pub value: Option<String>,
    pub updated_at: DateTime<Utc>,
}
