//! Session Entity
//!
//! Server-side half of a login session. The client holds only a signed
//! reference to `session_id` in its cookie.

use chrono::{DateTime, Duration, Utc};
use kernel::id::SessionId;

use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Session record
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    /// Session ID (UUID v4)
    pub session_id: SessionId,
    /// Principal; always references an existing user record
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
}

impl SessionRecord {
    /// Create a fresh session for `user_id`
    ///
    /// TTL is provided by the application layer (config). A TTL that runs
    /// past the representable date range is rejected.
    pub fn new(user_id: UserId, ttl: Duration) -> AuthResult<Self> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Internal(format!("Session TTL out of range: {ttl}")))?;

        Ok(Self {
            session_id: SessionId::new(),
            user_id,
            created_at: now,
            expires_at_ms: expires_at.timestamp_millis(),
        })
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}
