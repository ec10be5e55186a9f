//! Balance entity <-> model mapper

use credit_core::{BalanceRecord, UserId};

use crate::models::BalanceModel;

/// Convert BalanceModel to BalanceRecord entity
impl From<BalanceModel> for BalanceRecord {
    fn from(model: BalanceModel) -> Self {
        BalanceRecord {
            id: model.id,
            user_id: UserId::new(model.user_id),
            field: model.name,
            value: model.value.unwrap_or_default(),
            updated_at: model.updated_at,
        }
    }
}
