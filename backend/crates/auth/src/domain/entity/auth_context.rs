//! Auth Context
//!
//! Per-request view of who is calling. Derived fresh from the session
//! cookie on every request and never persisted.

use crate::domain::entity::user::UserRecord;

#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    user: Option<UserRecord>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: UserRecord) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }
}
