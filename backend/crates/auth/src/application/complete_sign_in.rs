//! Complete Sign In Use Case
//!
//! HandshakePending -> Authenticated: exchange the callback for a profile,
//! upsert the user, then start a session for it.

use std::sync::Arc;

use crate::application::session::SessionService;
use crate::domain::entity::user::UserRecord;
use crate::domain::provider::{CallbackParams, IdentityProvider};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};
use crate::error::AuthResult;

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: SessionToken,
    pub user_id: UserId,
}

pub struct CompleteSignInUseCase<P, U, S>
where
    P: IdentityProvider,
    U: UserRepository,
    S: SessionRepository,
{
    provider: Arc<P>,
    user_repo: Arc<U>,
    sessions: SessionService<S>,
}

impl<P, U, S> CompleteSignInUseCase<P, U, S>
where
    P: IdentityProvider,
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(provider: Arc<P>, user_repo: Arc<U>, sessions: SessionService<S>) -> Self {
        Self {
            provider,
            user_repo,
            sessions,
        }
    }

    /// Handle the provider callback
    ///
    /// Handshake failures return `AuthError::Handshake` before any store
    /// write. A session the client already held is replaced, not reused.
    pub async fn execute(
        &self,
        params: &CallbackParams,
        previous_token: Option<&str>,
    ) -> AuthResult<SignInOutput> {
        let provider = self.provider.name();
        let profile = self.provider.complete_handshake(params).await?;

        let user = UserRecord::from_profile(provider, profile);

        // User first: a session must never reference a missing user
        self.user_repo.upsert(&user).await?;
        let session_token = self.sessions.create(&user.id).await?;

        // The new session is already live; a stale one left behind expires on its own
        if let Some(previous) = previous_token {
            if let Err(e) = self.sessions.destroy(previous).await {
                tracing::warn!(error = %e, "Previous session destroy failed during sign-in");
            }
        }

        tracing::info!(
            user_id = %user.id,
            provider = %provider,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user_id: user.id,
        })
    }
}
