//! Sign Out Use Case
//!
//! Authenticated -> Anonymous: invalidates the presented session.

use crate::application::session::SessionService;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    sessions: SessionService<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(sessions: SessionService<S>) -> Self {
        Self { sessions }
    }

    /// Sign out from the current session, if any
    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<()> {
        if let Some(token) = session_token {
            self.sessions.destroy(token).await?;
            tracing::info!("User signed out");
        }
        Ok(())
    }
}
