//! Domain Layer
//!
//! Contains entities, value objects, repository traits and the
//! identity-provider contract.

pub mod entity;
pub mod provider;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{auth_context::AuthContext, session::SessionRecord, user::UserRecord};
pub use provider::{CallbackParams, HandshakeError, IdentityProvider, ProviderProfile};
pub use repository::{SessionRepository, UserRepository};
