//! Liveness and readiness checks
//!
//! Served outside the API key check and the rate limiter.

use axum::{extract::State, http::StatusCode, Json};
use credit_service::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Ready when the balance store answers; a switched-off ledger is still ready
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let context = state.service_context();
    let store = context.balance_repo().health_check().await;
    if let Err(e) = &store {
        warn!(error = %e, "Balance store health check failed");
    }

    let response = ReadinessResponse::ready(store.is_ok(), context.is_enabled());
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
