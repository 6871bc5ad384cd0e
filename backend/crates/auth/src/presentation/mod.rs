//! Presentation Layer
//!
//! HTTP handlers, DTOs, views, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;

pub use handlers::AuthAppState;
pub use middleware::{AuthMiddlewareState, resolve_auth_context};
pub use router::auth_router;
