//! Activity snapshot mapper

use chrono::NaiveDate;
use credit_core::{ActivitySnapshot, UserId};

use crate::models::ActivityModel;

impl ActivityModel {
    /// Attach the user and date the aggregate was computed for
    pub fn into_snapshot(self, user_id: UserId, reference_date: NaiveDate) -> ActivitySnapshot {
        ActivitySnapshot {
            user_id,
            reference_date,
            polarization_score: self.polarization_score,
            posts_on_date: self.posts_on_date,
            likes_on_date: self.likes_on_date,
        }
    }
}
