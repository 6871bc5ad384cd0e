//! Begin Sign In Use Case
//!
//! Anonymous -> HandshakePending: produce the provider redirect.
//! Nothing is remembered server-side until the callback arrives.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::provider::IdentityProvider;
use crate::error::AuthResult;

pub struct BeginSignInUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<P> BeginSignInUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self { provider, config }
    }

    /// Authorization URL to redirect the client to
    pub fn execute(&self) -> AuthResult<String> {
        let url = self.provider.begin_handshake(&self.config.scopes)?;

        tracing::info!(
            provider = %self.provider.name(),
            "Redirecting to identity provider"
        );

        Ok(url)
    }
}
