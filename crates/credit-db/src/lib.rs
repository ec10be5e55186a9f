//! # credit-db
//!
//! Database layer implementing the ledger ports with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! The ledger owns no tables. It reads and writes the host forum's schema:
//!
//! - `user_custom_fields`: one text-valued balance row per user
//! - `posts`: read-only activity source for the reward sweep
//! - `api_keys`: hashed keys checked by [`PgApiKeyAuthorizer`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use credit_db::pool::{create_pool, PoolConfig};
//! use credit_db::PgBalanceRepository;
//! use credit_core::BalanceRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     let balances = PgBalanceRepository::new(pool);
//!     let mean = balances.mean("credit_balance").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{PgActivityRepository, PgApiKeyAuthorizer, PgBalanceRepository};
