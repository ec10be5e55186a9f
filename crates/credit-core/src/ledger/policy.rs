//! Ledger policy - immutable settings shared by every sweep

use crate::error::DomainError;

/// Custom field name holding the balance
pub const DEFAULT_BALANCE_FIELD: &str = "credit_balance";

/// Cap enforced by the reward sweep
pub const DEFAULT_MAX_CREDIT_BALANCE: f64 = 100.0;

/// Balance field and cap, fixed for the lifetime of the service
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerPolicy {
    field_name: String,
    max_credit_balance: f64,
}

impl LedgerPolicy {
    /// Create a policy, rejecting an empty field name or a non-finite cap
    pub fn new(field_name: impl Into<String>, max_credit_balance: f64) -> Result<Self, DomainError> {
        let field_name = field_name.into();
        if field_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "balance field name must not be empty".to_string(),
            ));
        }
        if !max_credit_balance.is_finite() {
            return Err(DomainError::ValidationError(
                "maximum credit balance must be a finite number".to_string(),
            ));
        }
        Ok(Self {
            field_name,
            max_credit_balance,
        })
    }

    /// Custom field name of the balance records
    #[inline]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Upper bound applied by the reward sweep
    #[inline]
    pub fn max_credit_balance(&self) -> f64 {
        self.max_credit_balance
    }

    /// Clamp a balance to the cap, reporting whether the cap applied
    pub fn cap(&self, balance: f64) -> (f64, bool) {
        if balance > self.max_credit_balance {
            (self.max_credit_balance, true)
        } else {
            (balance, false)
        }
    }
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            field_name: DEFAULT_BALANCE_FIELD.to_string(),
            max_credit_balance: DEFAULT_MAX_CREDIT_BALANCE,
        }
    }
}
