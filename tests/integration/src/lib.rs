//! Integration test utilities for the credit ledger
//!
//! Provides an in-memory store implementing the ledger ports, a test server
//! that serves the real router over loopback, and request fixtures.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
pub use memory::InMemoryLedgerStore;
