//! # credit-core
//!
//! Domain layer containing balance entities, value objects, the ledger formulas,
//! signal strategies, and the ports (repository and authorizer traits).
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod ledger;
pub mod signals;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ActivitySnapshot, BalanceRecord, SweepKind, SweepReport};
pub use error::DomainError;
pub use ledger::{LedgerPolicy, DEFAULT_BALANCE_FIELD, DEFAULT_MAX_CREDIT_BALANCE};
pub use signals::{FollowerSignal, NeutralPolarity, NoFollowers, PolaritySignal};
pub use traits::{Authorizer, BalanceRepository, PostActivityRepository, RepoResult};
pub use value_objects::{
    format_balance, parse_lenient_f64, Amount, UserId, UserIdParseError,
};
