//! Credit ledger handlers
//!
//! Every handler takes [`ApiKeyAccess`] first, so access is settled before
//! parameters are parsed or any balance is read.

use axum::{extract::State, Json};
use credit_service::{FlatAddRequest, RewardRequest};
use tracing::{debug, instrument};

use crate::extractors::{ApiKeyAccess, SweepParams};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Mean balance of all users, `null` when nobody holds credits
///
/// GET /credits
#[instrument(skip_all)]
pub async fn get_mean(
    State(state): State<AppState>,
    _access: ApiKeyAccess,
) -> ApiResult<Json<Option<f64>>> {
    let mean = state.ledger().compute_mean().await?;
    Ok(Json(mean))
}

/// Add a flat amount to every balance
///
/// PUT /credits
#[instrument(skip_all)]
pub async fn add_credits(
    State(state): State<AppState>,
    _access: ApiKeyAccess,
    SweepParams(request): SweepParams<FlatAddRequest>,
) -> ApiResult<NoContent> {
    let report = state.ledger().apply_flat_add(&request).await?;
    debug!(visited = report.visited, changed = report.changed, "Credits added");
    Ok(NoContent)
}

/// Reward balances for yesterday's (or `date`'s) posting activity
///
/// PUT /credits/rewards
#[instrument(skip_all)]
pub async fn add_rewards(
    State(state): State<AppState>,
    _access: ApiKeyAccess,
    SweepParams(request): SweepParams<RewardRequest>,
) -> ApiResult<NoContent> {
    let report = state.ledger().apply_rewards(&request).await?;
    debug!(visited = report.visited, capped = report.capped, "Rewards granted");
    Ok(NoContent)
}
