//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{ActivitySnapshot, BalanceRecord};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Balance Repository
// ============================================================================

#[async_trait]
pub trait BalanceRepository: Send + Sync {
    /// List every balance record stored under `field`
    async fn find_all(&self, field: &str) -> RepoResult<Vec<BalanceRecord>>;

    /// Find the balance record of a single user
    async fn find_by_user(&self, field: &str, user_id: UserId) -> RepoResult<Option<BalanceRecord>>;

    /// Mean of all balances under `field`, `None` when there are no records
    async fn mean(&self, field: &str) -> RepoResult<Option<f64>>;

    /// Overwrite a user's balance and refresh its update time
    ///
    /// Returns the number of rows written.
    async fn update_balance(&self, field: &str, user_id: UserId, balance: f64) -> RepoResult<u64>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}

// ============================================================================
// Post Activity Repository
// ============================================================================

#[async_trait]
pub trait PostActivityRepository: Send + Sync {
    /// Activity of a user's posts for the given calendar date
    async fn snapshot(&self, user_id: UserId, date: NaiveDate) -> RepoResult<ActivitySnapshot>;
}

// ============================================================================
// Authorizer
// ============================================================================

/// Decides whether a presented API key may use the ledger
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn is_authorized(&self, api_key: &str) -> RepoResult<bool>;
}
