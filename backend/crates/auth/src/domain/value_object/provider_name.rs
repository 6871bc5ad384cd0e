//! Provider Name Value Object
//!
//! The identity providers this server can federate with. Parsed from the
//! `{provider}` path segment and used as the namespace of user IDs.

use std::str::FromStr;

use derive_more::Display;

use crate::error::AuthError;

/// Supported identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ProviderName {
    #[display("google")]
    Google,
}

impl ProviderName {
    /// Lowercase identifier used in paths, query flags and user IDs
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProviderName::Google => "google",
        }
    }

    /// Human-readable name for pages
    pub const fn label(&self) -> &'static str {
        match self {
            ProviderName::Google => "Google",
        }
    }
}

impl FromStr for ProviderName {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(ProviderName::Google),
            other => Err(AuthError::UnknownProvider(other.to_string())),
        }
    }
}
