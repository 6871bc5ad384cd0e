//! Auth Middleware
//!
//! Derives the caller's [`AuthContext`](crate::AuthContext) from the session cookie on every
//! request and stores it in request extensions for the handlers.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{CheckSessionUseCase, SessionService};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthError;

/// Middleware state
pub struct AuthMiddlewareState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthMiddlewareState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

/// Resolve the session cookie into an `AuthContext` extension
///
/// Missing or invalid cookies resolve to an anonymous context. Only an
/// unreachable store short-circuits the request.
pub async fn resolve_auth_context<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(
        state.repo.clone(),
        SessionService::new(state.repo.clone(), state.config.clone()),
    );

    let ctx = use_case.get_auth_context(token.as_deref()).await?;
    tracing::trace!(authenticated = ctx.is_authenticated(), "Resolved auth context");

    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
