//! Model to entity mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - [`ActivityModel::into_snapshot`]: attach the lookup key the aggregate row lacks
//!
//! [`ActivityModel::into_snapshot`]: crate::models::ActivityModel::into_snapshot

mod activity;
mod balance;
