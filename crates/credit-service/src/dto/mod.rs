//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for the sweep parameters
//! - Response DTOs for the health endpoints

pub mod requests;
pub mod responses;

pub use requests::{AmountParam, FlatAddRequest, RewardRequest};
pub use responses::{HealthChecks, HealthResponse, ReadinessResponse};
