//! Domain entities - core business objects

mod activity;
mod balance;
mod report;

pub use activity::ActivitySnapshot;
pub use balance::BalanceRecord;
pub use report::{SweepKind, SweepReport};
