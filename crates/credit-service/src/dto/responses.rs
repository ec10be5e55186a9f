//! Response DTOs for the health endpoints
//!
//! The ledger endpoints answer with a bare JSON number or no body at all.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Per-dependency status, plus whether the credit routes are switched on
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub ledger: String,
}

impl ReadinessResponse {
    /// Readiness depends on the database only
    pub fn ready(database_healthy: bool, ledger_enabled: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                ledger: if ledger_enabled { "enabled" } else { "disabled" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
