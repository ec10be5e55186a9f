//! Service context - dependency container for services
//!
//! Holds the ports, the signal strategies and the ledger policy.

use std::sync::Arc;

use credit_core::{
    Authorizer, BalanceRepository, FollowerSignal, LedgerPolicy, NeutralPolarity, NoFollowers,
    PolaritySignal, PostActivityRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    balance_repo: Arc<dyn BalanceRepository>,
    activity_repo: Arc<dyn PostActivityRepository>,

    // Access control
    authorizer: Arc<dyn Authorizer>,

    // Signals
    polarity_signal: Arc<dyn PolaritySignal>,
    follower_signal: Arc<dyn FollowerSignal>,

    // Settings
    policy: LedgerPolicy,
    enabled: bool,
}

impl ServiceContext {
    /// Create a context with neutral signals, the default policy, and the system enabled
    pub fn new(
        balance_repo: Arc<dyn BalanceRepository>,
        activity_repo: Arc<dyn PostActivityRepository>,
        authorizer: Arc<dyn Authorizer>,
    ) -> Self {
        Self {
            balance_repo,
            activity_repo,
            authorizer,
            polarity_signal: Arc::new(NeutralPolarity),
            follower_signal: Arc::new(NoFollowers),
            policy: LedgerPolicy::default(),
            enabled: true,
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn balance_repo(&self) -> &dyn BalanceRepository {
        self.balance_repo.as_ref()
    }

    pub fn activity_repo(&self) -> &dyn PostActivityRepository {
        self.activity_repo.as_ref()
    }

    pub fn authorizer(&self) -> &dyn Authorizer {
        self.authorizer.as_ref()
    }

    // === Signals ===

    pub fn polarity_signal(&self) -> &dyn PolaritySignal {
        self.polarity_signal.as_ref()
    }

    pub fn follower_signal(&self) -> &dyn FollowerSignal {
        self.follower_signal.as_ref()
    }

    // === Settings ===

    pub fn policy(&self) -> &LedgerPolicy {
        &self.policy
    }

    /// Whether the credit system is switched on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("signals", &"...")
            .field("policy", &self.policy)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    balance_repo: Option<Arc<dyn BalanceRepository>>,
    activity_repo: Option<Arc<dyn PostActivityRepository>>,
    authorizer: Option<Arc<dyn Authorizer>>,
    polarity_signal: Option<Arc<dyn PolaritySignal>>,
    follower_signal: Option<Arc<dyn FollowerSignal>>,
    policy: Option<LedgerPolicy>,
    enabled: bool,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            balance_repo: None,
            activity_repo: None,
            authorizer: None,
            polarity_signal: None,
            follower_signal: None,
            policy: None,
            enabled: true,
        }
    }

    pub fn balance_repo(mut self, repo: Arc<dyn BalanceRepository>) -> Self {
        self.balance_repo = Some(repo);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn PostActivityRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    pub fn polarity_signal(mut self, signal: Arc<dyn PolaritySignal>) -> Self {
        self.polarity_signal = Some(signal);
        self
    }

    pub fn follower_signal(mut self, signal: Arc<dyn FollowerSignal>) -> Self {
        self.follower_signal = Some(signal);
        self
    }

    pub fn policy(mut self, policy: LedgerPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Build the ServiceContext
    ///
    /// Signals default to the neutral implementations and the policy to its defaults.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository or the authorizer is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let mut ctx = ServiceContext::new(
            self.balance_repo
                .ok_or_else(|| ServiceError::validation("balance_repo is required"))?,
            self.activity_repo
                .ok_or_else(|| ServiceError::validation("activity_repo is required"))?,
            self.authorizer
                .ok_or_else(|| ServiceError::validation("authorizer is required"))?,
        );

        if let Some(signal) = self.polarity_signal {
            ctx.polarity_signal = signal;
        }
        if let Some(signal) = self.follower_signal {
            ctx.follower_signal = signal;
        }
        if let Some(policy) = self.policy {
            ctx.policy = policy;
        }
        ctx.enabled = self.enabled;

        Ok(ctx)
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
