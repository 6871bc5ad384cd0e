//! Session Service
//!
//! Session store operations over a [`SessionRepository`]: issue a signed
//! token for a user, resolve a presented token back to its user, destroy.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::SessionRecord;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};
use crate::error::AuthResult;

pub struct SessionService<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SessionService<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Start a session for `user_id` and return the token for the cookie
    pub async fn create(&self, user_id: &UserId) -> AuthResult<SessionToken> {
        let session = SessionRecord::new(user_id.clone(), self.config.session_ttl_chrono()?)?;
        self.session_repo.insert(&session).await?;

        tracing::debug!(
            session_id = %session.session_id,
            user_id = %user_id,
            "Session created"
        );

        Ok(SessionToken::sign(
            &session.session_id,
            &self.config.session_secret,
        ))
    }

    /// Resolve a presented token to its principal
    ///
    /// Forged, malformed, unknown, and expired tokens all yield `Ok(None)`.
    /// Only a failing backing store produces an error.
    pub async fn resolve(&self, token: &str) -> AuthResult<Option<UserId>> {
        let Some(session_id) = SessionToken::verify(token, &self.config.session_secret) else {
            tracing::debug!("Session token failed verification");
            return Ok(None);
        };

        let Some(session) = self.session_repo.find(&session_id).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.session_repo.delete(&session_id).await?;
            tracing::debug!(session_id = %session_id, "Expired session removed");
            return Ok(None);
        }

        Ok(Some(session.user_id))
    }

    /// Destroy the session behind a token
    ///
    /// Idempotent: absent sessions and unverifiable tokens are a no-op.
    pub async fn destroy(&self, token: &str) -> AuthResult<()> {
        if let Some(session_id) = SessionToken::verify(token, &self.config.session_secret) {
            self.session_repo.delete(&session_id).await?;
            tracing::debug!(session_id = %session_id, "Session destroyed");
        }
        Ok(())
    }
}
