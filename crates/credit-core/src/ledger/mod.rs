//! Ledger rules - the balance policy and the per-user formulas applied by sweeps

mod formula;
mod policy;

pub use formula::{adjusted_balance, flat_add_balance, reward_for, REWARD_BASE};
pub use policy::{LedgerPolicy, DEFAULT_BALANCE_FIELD, DEFAULT_MAX_CREDIT_BALANCE};
