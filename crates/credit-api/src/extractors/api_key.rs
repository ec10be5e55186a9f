//! API key extractor
//!
//! Reads the `Api-Key` header and checks it through the service's authorizer.
//! A switched-off credit system answers 404 before the key is looked at.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::{headers, TypedHeader};

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the caller's API key
pub static API_KEY_HEADER: HeaderName = HeaderName::from_static("api-key");

/// Typed `Api-Key` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl headers::Header for ApiKey {
    fn name() -> &'static HeaderName {
        &API_KEY_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let key = value.to_str().map_err(|_| headers::Error::invalid())?;
        Ok(Self(key.trim().to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

/// Proof that the request carried an accepted API key
#[derive(Debug, Clone, Copy)]
pub struct ApiKeyAccess;

#[async_trait]
impl<S> FromRequestParts<S> for ApiKeyAccess
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let service = app_state.ledger();

        service.ensure_enabled()?;

        let key = TypedHeader::<ApiKey>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(ApiKey(key))| key);

        service.authorize(key.as_deref()).await?;

        Ok(Self)
    }
}
