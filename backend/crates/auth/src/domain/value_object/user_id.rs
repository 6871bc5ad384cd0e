//! User ID Value Object
//!
//! Stable, provider-namespaced identifier: `"<provider>:<externalId>"`.
//! The same external account always maps to the same ID, which is what
//! makes sign-in an upsert rather than an insert.

use std::fmt;

use super::provider_name::ProviderName;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Build the ID for an account at an identity provider
    pub fn federated(provider: ProviderName, external_id: &str) -> Self {
        Self(format!("{}:{}", provider.as_str(), external_id))
    }

    /// Restore from storage (no validation)
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
