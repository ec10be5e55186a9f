//! API key authorizer backed by the host's `api_keys` table

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use credit_common::hash_api_key;
use credit_core::{Authorizer, RepoResult};

use super::error::map_db_error;

/// Accepts a key when its SHA-256 digest matches a non-revoked `api_keys` row
#[derive(Clone)]
pub struct PgApiKeyAuthorizer {
    pool: PgPool,
}

impl PgApiKeyAuthorizer {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Authorizer for PgApiKeyAuthorizer {
    #[instrument(skip_all)]
    async fn is_authorized(&self, api_key: &str) -> RepoResult<bool> {
        if api_key.is_empty() {
            return Ok(false);
        }

        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM api_keys WHERE key_hash = $1 AND revoked_at IS NULL)
            ",
        )
        .bind(hash_api_key(api_key))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
