//! Axum extractors for request handling
//!
//! Custom extractors for API key access and sweep parameters.

mod api_key;
mod params;

pub use api_key::{ApiKey, ApiKeyAccess, API_KEY_HEADER};
pub use params::{MergeParams, SweepParams};
