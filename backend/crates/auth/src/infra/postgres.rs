//! PostgreSQL Repository Implementations
//!
//! Persistent backing store. Any sqlx failure surfaces as
//! `AuthError::SessionStoreUnavailable`, failing the request, not the process.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::id::SessionId;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::{session::SessionRecord, user::UserRecord};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{provider_name::ProviderName, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn upsert(&self, user: &UserRecord) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO federated_users (
                user_id,
                provider,
                display_name,
                emails,
                photos,
                raw_profile,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id) DO UPDATE SET
                provider = EXCLUDED.provider,
                display_name = EXCLUDED.display_name,
                emails = EXCLUDED.emails,
                photos = EXCLUDED.photos,
                raw_profile = EXCLUDED.raw_profile,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user.id.as_str())
        .bind(user.provider.as_str())
        .bind(&user.display_name)
        .bind(&user.emails)
        .bind(&user.photos)
        .bind(Json(&user.raw))
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                provider,
                display_name,
                emails,
                photos,
                raw_profile,
                created_at,
                updated_at
            FROM federated_users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn insert(&self, session: &SessionRecord) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_id,
                user_id,
                created_at,
                expires_at_ms
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(session.user_id.as_str())
        .bind(session.created_at)
        .bind(session.expires_at_ms)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, session_id: &SessionId) -> AuthResult<Option<SessionRecord>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                created_at,
                expires_at_ms
            FROM auth_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthSessionRow::into_session))
    }

    async fn delete(&self, session_id: &SessionId) -> AuthResult<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE session_id = $1")
            .bind(session_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    provider: String,
    display_name: String,
    emails: Vec<String>,
    photos: Vec<String>,
    raw_profile: Json<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<UserRecord> {
        let provider = ProviderName::from_str(&self.provider)
            .map_err(|e| AuthError::Internal(format!("Invalid provider: {}", e)))?;

        Ok(UserRecord {
            id: UserId::from_db(self.user_id),
            provider,
            display_name: self.display_name,
            emails: self.emails,
            photos: self.photos,
            raw: self.raw_profile.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    session_id: Uuid,
    user_id: String,
    created_at: DateTime<Utc>,
    expires_at_ms: i64,
}

impl AuthSessionRow {
    fn into_session(self) -> SessionRecord {
        SessionRecord {
            session_id: SessionId::from_uuid(self.session_id),
            user_id: UserId::from_db(self.user_id),
            created_at: self.created_at,
            expires_at_ms: self.expires_at_ms,
        }
    }
}
