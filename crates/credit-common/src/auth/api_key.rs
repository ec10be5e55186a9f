//! API key hashing and static key authorization
//!
//! Keys are never compared in plain text: both the presented key and the
//! configured keys are reduced to lowercase SHA-256 hex digests, the same
//! form the `api_keys.key_hash` column stores.

use std::collections::HashSet;

use async_trait::async_trait;
use credit_core::{Authorizer, RepoResult};
use sha2::{Digest, Sha256};

/// Hash an API key into the digest stored by the host application
#[must_use]
pub fn hash_api_key(key: &str) -> String {
    hex::encode(Sha256::digest(key.as_bytes()))
}

/// Authorizer backed by a fixed set of keys from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticKeyAuthorizer {
    hashes: HashSet<String>,
}

impl StaticKeyAuthorizer {
    /// Build from plain-text keys
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hashes = keys
            .into_iter()
            .map(|k| hash_api_key(k.as_ref()))
            .collect();
        Self { hashes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    fn contains(&self, api_key: &str) -> bool {
        !api_key.is_empty() && self.hashes.contains(&hash_api_key(api_key))
    }
}

#[async_trait]
impl Authorizer for StaticKeyAuthorizer {
    async fn is_authorized(&self, api_key: &str) -> RepoResult<bool> {
        Ok(self.contains(api_key))
    }
}
