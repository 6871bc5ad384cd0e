//! Check Session Use Case
//!
//! Derives the per-request [`AuthContext`] from a presented token.

use std::sync::Arc;

use crate::application::session::SessionService;
use crate::domain::entity::auth_context::AuthContext;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;

pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    sessions: SessionService<S>,
}

impl<U, S> CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, sessions: SessionService<S>) -> Self {
        Self {
            user_repo,
            sessions,
        }
    }

    /// Resolve who is calling
    ///
    /// Any token that does not lead to a live session and an existing user
    /// is anonymous. Errors only when a store is unavailable.
    pub async fn get_auth_context(&self, session_token: Option<&str>) -> AuthResult<AuthContext> {
        let Some(token) = session_token else {
            return Ok(AuthContext::anonymous());
        };

        let Some(user_id) = self.sessions.resolve(token).await? else {
            return Ok(AuthContext::anonymous());
        };

        match self.user_repo.find_by_id(&user_id).await? {
            Some(user) => Ok(AuthContext::authenticated(user)),
            None => {
                tracing::warn!(user_id = %user_id, "Session references unknown user");
                Ok(AuthContext::anonymous())
            }
        }
    }
}
