//! Identity Provider Contract
//!
//! Translation boundary to an external provider's redirect protocol.
//! Adapters never touch the user or session stores.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::value_object::provider_name::ProviderName;
use crate::error::AuthResult;

/// Error code a provider sends back when the user denies consent
pub const ACCESS_DENIED: &str = "access_denied";

/// Query parameters of the provider's redirect back to the callback route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Classify the callback and extract the authorization code
    pub fn authorization_code(&self) -> Result<&str, HandshakeError> {
        if let Some(error) = self.error.as_deref() {
            if error == ACCESS_DENIED {
                return Err(HandshakeError::UserCancelled);
            }
            let detail = match self.error_description.as_deref() {
                Some(description) => format!("{error}: {description}"),
                None => error.to_string(),
            };
            return Err(HandshakeError::ProviderRejected(detail));
        }

        self.code
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| HandshakeError::Malformed("missing authorization code".to_string()))
    }
}

/// Profile returned by a successful handshake
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    /// Account ID at the provider
    pub external_id: String,
    pub display_name: String,
    pub emails: Vec<String>,
    pub photos: Vec<String>,
    /// Provider payload, opaque to this crate
    pub raw: Value,
}

/// Why a handshake did not produce a profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandshakeError {
    /// Provider reports the user denied access
    #[error("user cancelled sign-in")]
    UserCancelled,

    /// Credentials, scope, or token exchange failure at the provider
    #[error("provider rejected handshake: {0}")]
    ProviderRejected(String),

    /// Callback parameters or provider responses missing or unparseable
    #[error("malformed handshake: {0}")]
    Malformed(String),
}

/// Identity provider adapter
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Which provider this adapter speaks to
    fn name(&self) -> ProviderName;

    /// Authorization URL the client must be redirected to
    fn begin_handshake(&self, scopes: &[String]) -> AuthResult<String>;

    /// Exchange the callback for a profile
    async fn complete_handshake(
        &self,
        params: &CallbackParams,
    ) -> Result<ProviderProfile, HandshakeError>;
}
