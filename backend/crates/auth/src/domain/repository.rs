//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer. Each call is atomic with respect to the others;
//! no further locking discipline is required of callers.

use kernel::id::SessionId;

use crate::domain::entity::{session::SessionRecord, user::UserRecord};
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert or overwrite by ID (last write wins)
    async fn upsert(&self, user: &UserRecord) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<UserRecord>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Store a new session
    async fn insert(&self, session: &SessionRecord) -> AuthResult<()>;

    /// Find session by ID, expired or not
    async fn find(&self, session_id: &SessionId) -> AuthResult<Option<SessionRecord>>;

    /// Delete a session; absent sessions are not an error
    async fn delete(&self, session_id: &SessionId) -> AuthResult<()>;

    /// Remove expired sessions, returning how many were deleted
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
