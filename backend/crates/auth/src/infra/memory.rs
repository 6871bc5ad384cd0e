//! In-Memory Repository Implementation
//!
//! Default backing store. Contents live as long as the process.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use kernel::id::SessionId;

use crate::domain::entity::{session::SessionRecord, user::UserRecord};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Concurrent in-memory auth repository
///
/// Cloning yields another handle to the same maps.
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    users: Arc<DashMap<UserId, UserRecord>>,
    sessions: Arc<DashMap<SessionId, SessionRecord>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for InMemoryAuthRepository {
    async fn upsert(&self, user: &UserRecord) -> AuthResult<()> {
        self.users
            .entry(user.id.clone())
            .and_modify(|existing| {
                let created_at = existing.created_at;
                *existing = user.clone();
                existing.created_at = created_at;
            })
            .or_insert_with(|| user.clone());

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<UserRecord>> {
        Ok(self.users.get(user_id).map(|entry| entry.value().clone()))
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for InMemoryAuthRepository {
    async fn insert(&self, session: &SessionRecord) -> AuthResult<()> {
        self.sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find(&self, session_id: &SessionId) -> AuthResult<Option<SessionRecord>> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|entry| entry.value().clone()))
    }

    async fn delete(&self, session_id: &SessionId) -> AuthResult<()> {
        self.sessions.remove(session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.expires_at_ms >= now_ms);
        let deleted = before.saturating_sub(self.sessions.len()) as u64;

        tracing::info!(
            sessions_deleted = deleted,
            sessions_live = self.session_count(),
            users = self.user_count(),
            "Cleaned up expired auth sessions"
        );

        Ok(deleted)
    }
}
