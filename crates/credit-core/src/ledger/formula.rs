//! Per-user balance formulas
//!
//! Pure arithmetic; the sweeps in the service layer feed them with stored
//! balances, activity snapshots and signal values.

use crate::entities::ActivitySnapshot;

/// Base reward per like, added to the operator supplied amount
pub const REWARD_BASE: f64 = 0.5;

/// Balance after a flat credit grant, scaled down by the user's polarity
#[inline]
pub fn flat_add_balance(current: f64, amount: f64, polarity: f64) -> f64 {
    amount * (1.0 - polarity) + current
}

/// Credits earned for the activity captured by `snapshot`
pub fn reward_for(amount: f64, snapshot: &ActivitySnapshot, followers: i64) -> f64 {
    (REWARD_BASE + amount)
        * (1.0 - snapshot.polarization_score)
        * snapshot.posts_on_date as f64
        * (followers + snapshot.likes_on_date) as f64
}

/// Uncapped balance after a reward
///
/// Keep the cancelling `- 1.0 ... + 1.0` pair: it marks the slot of a
/// future non-unit adjustment term.
pub fn adjusted_balance(current: f64, reward: f64, polarization_score: f64) -> f64 {
    let raw = current + reward;
    raw - 1.0 + (1.0 - polarization_score) * reward / 2.0 + 1.0
}
