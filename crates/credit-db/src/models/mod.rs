//! Database models - SQLx-compatible structs for the host schema

mod activity;
mod balance;

pub use activity::ActivityModel;
pub use balance::BalanceModel;
