//! Auth Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::provider::IdentityProvider;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, resolve_auth_context};

/// Create the site router for any store and identity provider
pub fn auth_router<R, P>(repo: R, provider: P, config: AuthConfig) -> Router
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    let config = Arc::new(config);

    let middleware_state = AuthMiddlewareState {
        repo: repo.clone(),
        config: config.clone(),
    };

    let state = AuthAppState {
        repo,
        provider: Arc::new(provider),
        config,
    };

    Router::new()
        .route("/", get(handlers::home))
        .route("/auth/{provider}", get(handlers::begin_auth::<R, P>))
        .route(
            "/auth/{provider}/callback",
            get(handlers::auth_callback::<R, P>),
        )
        .route("/profile", get(handlers::profile::<R, P>))
        .route("/logout", get(handlers::logout::<R, P>))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            resolve_auth_context::<R>,
        ))
        .with_state(state)
}
