//! API key authentication

mod api_key;

pub use api_key::{hash_api_key, StaticKeyAuthorizer};
