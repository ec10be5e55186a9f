//! Activity snapshot - a user's posting activity as seen by the reward sweep

use chrono::NaiveDate;

use crate::value_objects::UserId;

/// Derived per-user activity for one reference date (never persisted)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivitySnapshot {
    pub user_id: UserId,
    pub reference_date: NaiveDate,
    /// Mean absolute like score over all of the user's posts, any date
    pub polarization_score: f64,
    /// Posts created on the reference date
    pub posts_on_date: i64,
    /// Likes received by the posts created on the reference date
    pub likes_on_date: i64,
}

impl ActivitySnapshot {
    /// Snapshot for a user without any posts
    pub fn empty(user_id: UserId, reference_date: NaiveDate) -> Self {
        Self {
            user_id,
            reference_date,
            polarization_score: 0.0,
            posts_on_date: 0,
            likes_on_date: 0,
        }
    }

    /// Check if the user posted on the reference date
    #[inline]
    pub fn is_active(&self) -> bool {
        self.posts_on_date > 0
    }
}
