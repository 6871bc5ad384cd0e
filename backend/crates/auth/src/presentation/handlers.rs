//! HTTP Handlers

use axum::Extension;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::{
    BeginSignInUseCase, CompleteSignInUseCase, SessionService, SignOutUseCase,
};
use crate::domain::entity::auth_context::AuthContext;
use crate::domain::provider::{CallbackParams, HandshakeError, IdentityProvider};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::provider_name::ProviderName;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{HomeQuery, LoginNotice};
use crate::presentation::views;

/// Shared state for auth handlers
pub struct AuthAppState<R, P> {
    pub repo: Arc<R>,
    pub provider: Arc<P>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: only the `Arc`s are cloned, `R` and `P` need not be `Clone`
impl<R, P> Clone for AuthAppState<R, P> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            provider: self.provider.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R, P> AuthAppState<R, P>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    fn sessions(&self) -> SessionService<R> {
        SessionService::new(self.repo.clone(), self.config.clone())
    }

    /// The `{provider}` segment must name the configured provider
    fn provider_for(&self, raw: &str) -> AuthResult<ProviderName> {
        let name = raw.parse::<ProviderName>()?;
        if name != self.provider.name() {
            return Err(AuthError::UnknownProvider(raw.to_string()));
        }
        Ok(name)
    }

    fn session_cookie_token(&self, headers: &HeaderMap) -> Option<String> {
        extract_cookie(headers, &self.config.session_cookie_name)
    }
}

// ============================================================================
// Home
// ============================================================================

/// GET /
///
/// An unparseable query string shows the plain login card.
pub async fn home(
    Extension(ctx): Extension<AuthContext>,
    query: Result<Query<HomeQuery>, QueryRejection>,
) -> Html<String> {
    let query = query.map(|Query(q)| q).unwrap_or_default();

    match ctx.user() {
        Some(user) => Html(views::greeting(user)),
        None => Html(views::login(query.notice())),
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// GET /auth/{provider}
pub async fn begin_auth<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Path(provider): Path<String>,
) -> AuthResult<Redirect>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    state.provider_for(&provider)?;

    let use_case = BeginSignInUseCase::new(state.provider.clone(), state.config.clone());
    let url = use_case.execute()?;

    Ok(Redirect::to(&url))
}

/// GET /auth/{provider}/callback
///
/// Every handshake outcome, including a query string that does not parse,
/// ends in a redirect.
pub async fn auth_callback<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Path(provider): Path<String>,
    query: Result<Query<CallbackParams>, QueryRejection>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let provider = state.provider_for(&provider)?;
    let previous_token = state.session_cookie_token(&headers);

    let outcome = match query {
        Ok(Query(params)) => {
            let use_case = CompleteSignInUseCase::new(
                state.provider.clone(),
                state.repo.clone(),
                state.sessions(),
            );
            use_case.execute(&params, previous_token.as_deref()).await
        }
        Err(rejection) => Err(HandshakeError::Malformed(rejection.body_text()).into()),
    };

    match outcome {
        Ok(output) => {
            let cookie = state
                .config
                .session_cookie()
                .build_set_cookie(output.session_token.as_str());

            Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/profile")).into_response())
        }
        Err(AuthError::Handshake(e)) => {
            let notice = match e {
                HandshakeError::UserCancelled => {
                    tracing::info!(provider = %provider, "Sign-in cancelled by user");
                    LoginNotice::Cancelled(provider)
                }
                other => {
                    tracing::warn!(provider = %provider, error = %other, "Sign-in failed");
                    LoginNotice::Failed(provider)
                }
            };

            Ok(Redirect::to(&notice.redirect_path()).into_response())
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Profile
// ============================================================================

/// GET /profile
pub async fn profile<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Extension(ctx): Extension<AuthContext>,
) -> Response
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    match ctx.user() {
        Some(user) => {
            Html(views::profile(user, &state.config.placeholder_photo_url)).into_response()
        }
        None => Redirect::to("/").into_response(),
    }
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET /logout
pub async fn logout<R, P>(
    State(state): State<AuthAppState<R, P>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: UserRepository + SessionRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let token = state.session_cookie_token(&headers);

    let use_case = SignOutUseCase::new(state.sessions());
    // Ignore errors - the cookie is cleared regardless
    if let Err(e) = use_case.execute(token.as_deref()).await {
        tracing::warn!(error = %e, "Session destroy failed during logout");
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    ([(header::SET_COOKIE, cookie)], Redirect::to("/"))
}
