//! Auth (Federated Login) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and identity-provider traits
//! - `application/` - Use cases: begin/complete sign-in, session checks, sign-out
//! - `infra/` - In-memory and PostgreSQL stores, Google OAuth2 adapter
//! - `presentation/` - HTTP handlers, server-rendered views, router, middleware
//!
//! ## Features
//! - Sign-in through an external OAuth2/OpenID identity provider (Google)
//! - Server-side sessions referenced by an HMAC-signed cookie token
//! - Per-request `AuthContext` derived from the cookie, never cached
//!
//! ## Security Model
//! - Session IDs come from the OS CSPRNG; cookies carry `id.HMAC(id)`
//! - Forged, unknown, expired, or destroyed tokens resolve to "anonymous"
//! - Session cookies are `HttpOnly`; `Secure` outside development
//! - The user record is written before the session that references it

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::auth_context::AuthContext;
pub use error::{AuthError, AuthResult};
pub use infra::google::{GoogleConfig, GoogleIdentityProvider};
pub use infra::memory::InMemoryAuthRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::provider::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::{SessionRepository, UserRepository};
    pub use crate::infra::memory::InMemoryAuthRepository as MemoryStore;
    pub use crate::infra::postgres::PgAuthRepository as PgStore;
}
