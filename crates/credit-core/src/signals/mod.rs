//! Per-user signals consumed by the ledger formulas
//!
//! Polarity and follower count are not tracked by the forum yet. The sweeps
//! read them through these traits so a real source can be plugged in later;
//! the shipped implementations return constants.

use async_trait::async_trait;

use crate::traits::RepoResult;
use crate::value_objects::UserId;

/// User-level polarity used by the flat-add sweep (0 = neutral, 1 = fully polar)
#[async_trait]
pub trait PolaritySignal: Send + Sync {
    async fn polarity(&self, user_id: UserId) -> RepoResult<f64>;
}

/// Follower count used by the reward sweep
#[async_trait]
pub trait FollowerSignal: Send + Sync {
    async fn followers(&self, user_id: UserId) -> RepoResult<i64>;
}

/// Polarity signal that treats every user as neutral
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralPolarity;

#[async_trait]
impl PolaritySignal for NeutralPolarity {
    async fn polarity(&self, _user_id: UserId) -> RepoResult<f64> {
        Ok(0.0)
    }
}

/// Follower signal for a forum without followers
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFollowers;

#[async_trait]
impl FollowerSignal for NoFollowers {
    async fn followers(&self, _user_id: UserId) -> RepoResult<i64> {
        Ok(0)
    }
}
