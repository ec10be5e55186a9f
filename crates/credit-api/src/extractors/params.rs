//! Sweep parameter extractor
//!
//! Collects parameters from the query string and, when present, from a JSON
//! or form-encoded body. Body fields win over query fields. The merged value
//! is validated before the handler runs.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header, HeaderMap},
    Form,
};
use credit_service::{FlatAddRequest, RewardRequest};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Requests whose query and body parameters can be combined
pub trait MergeParams: Sized {
    /// Combine query parameters with body parameters, preferring the body
    fn merge(query: Self, body: Self) -> Self;
}

impl MergeParams for FlatAddRequest {
    fn merge(query: Self, body: Self) -> Self {
        query.overlay(body)
    }
}

impl MergeParams for RewardRequest {
    fn merge(query: Self, body: Self) -> Self {
        query.overlay(body)
    }
}

/// Validated sweep parameters
#[derive(Debug, Clone)]
pub struct SweepParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for SweepParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + MergeParams + Default + Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let Query(query) = Query::<T>::from_request_parts(&mut parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        let from_body = if is_form(&parts.headers) {
            let req = Request::from_parts(parts, body);
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_body(e.body_text()))?;
            Some(value)
        } else {
            let req = Request::from_parts(parts, body);
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_body(e.body_text()))?;
            parse_json_body(&bytes)?
        };

        let merged = match from_body {
            Some(body) => T::merge(query, body),
            None => query,
        };

        merged.validate()?;
        Ok(Self(merged))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Parse a JSON body, treating an empty body as absent
fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|e| ApiError::invalid_body(e.to_string()))
}
