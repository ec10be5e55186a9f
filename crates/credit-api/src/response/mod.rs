//! Error responses for the ledger endpoints
//!
//! Every failure renders as `{"error": {"code", "message", "details"?}}`.
//! Bodies of 5xx responses carry a generic message only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use credit_common::ErrorResponse;
use credit_service::{validation_message, ServiceError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

const GENERIC_MESSAGE: &str = "Internal server error";

/// Rejection of a `/credits` request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure reported by the ledger service (access, switch-off, store)
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Merged parameters failed validation
    #[error("Validation error: {}", validation_message(.0))]
    Validation(#[from] ValidationErrors),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Validation(_) | Self::InvalidQuery(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// Body of the error response
    fn to_body(&self) -> ErrorBody {
        let message = if self.status_code().is_server_error() {
            GENERIC_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let details = match self {
            Self::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        };

        ErrorBody {
            error: ErrorResponse {
                code: self.error_code().to_string(),
                message,
                details,
            },
        }
    }
}

/// Top-level error envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self, "Ledger request failed");
        }

        (status, Json(self.to_body())).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Empty `204 No Content` answer of the mutating sweeps
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
