//! Repository implementations
//!
//! PostgreSQL implementations of the ports defined in credit-core.

mod activity;
mod api_key;
mod balance;
mod error;

pub use activity::PgActivityRepository;
pub use api_key::PgApiKeyAuthorizer;
pub use balance::PgBalanceRepository;
