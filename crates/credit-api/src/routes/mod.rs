//! Route definitions
//!
//! Ledger routes are mounted under `/credits`; health routes sit at the root.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{credits, health};
use crate::state::AppState;

/// Create the ledger router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/credits", credit_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn credit_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(credits::get_mean).put(credits::add_credits))
        .route("/rewards", put(credits::add_rewards))
}
