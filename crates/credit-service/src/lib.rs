//! # credit-service
//!
//! Application layer containing the ledger sweeps, API key checks, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{AmountParam, FlatAddRequest, HealthResponse, ReadinessResponse, RewardRequest};
pub use services::{
    default_reward_date, validation_message, LedgerService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
