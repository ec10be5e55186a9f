//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and orchestrate the domain ports.

pub mod context;
pub mod error;
pub mod ledger;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{validation_message, ServiceError, ServiceResult};
pub use ledger::{default_reward_date, LedgerService};
