//! Session Token Value Object
//!
//! The opaque capability a client presents in its session cookie:
//! `"<session-uuid>.<base64url HMAC-SHA256(session-uuid)>"`.
//! The signature lets forged or mangled cookies be rejected before any
//! store lookup.

use std::fmt;

use kernel::id::SessionId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Sign a session ID with the server secret
    pub fn sign(session_id: &SessionId, secret: &[u8; 32]) -> Self {
        let id = session_id.to_string();
        let signature = hmac_sha256(secret, id.as_bytes());
        Self(format!("{}.{}", id, to_base64url(&signature)))
    }

    /// Verify a presented token and recover its session ID
    ///
    /// Returns `None` for anything malformed or not signed with `secret`.
    pub fn verify(raw: &str, secret: &[u8; 32]) -> Option<SessionId> {
        let (id, signature_b64) = raw.split_once('.')?;
        let signature = from_base64url(signature_b64).ok()?;

        if !verify_hmac_sha256(secret, id.as_bytes(), &signature) {
            return None;
        }

        id.parse::<Uuid>().ok().map(SessionId::from_uuid)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}
