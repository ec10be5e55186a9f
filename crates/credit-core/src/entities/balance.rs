//! Balance record entity - one user's persisted credit balance

use chrono::{DateTime, Utc};

use crate::value_objects::{parse_lenient_f64, UserId};

/// Balance record stored as a user custom field
///
/// The value stays in its stored text form; [`BalanceRecord::balance`]
/// decodes it with the same lenient rules used for request amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceRecord {
    pub id: i64,
    pub user_id: UserId,
    pub field: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl BalanceRecord {
    /// Create a new BalanceRecord
    pub fn new(id: i64, user_id: UserId, field: String, value: String) -> Self {
        Self {
            id,
            user_id,
            field,
            value,
            updated_at: Utc::now(),
        }
    }

    /// Numeric balance, zero when the stored text is not numeric
    #[inline]
    pub fn balance(&self) -> f64 {
        parse_lenient_f64(&self.value)
    }
}
