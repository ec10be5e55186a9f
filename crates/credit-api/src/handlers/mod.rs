//! Route handlers

pub mod credits;
pub mod health;
