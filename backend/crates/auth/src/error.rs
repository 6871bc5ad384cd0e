//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::provider::HandshakeError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Identity provider handshake did not yield a profile
    #[error("Identity provider handshake failed: {0}")]
    Handshake(#[from] HandshakeError),

    /// `{provider}` path segment names no configured provider
    #[error("Unknown identity provider: {0}")]
    UnknownProvider(String),

    /// Backing store (sessions or users) could not be reached
    #[error("Session store unavailable")]
    SessionStoreUnavailable(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Handshake(HandshakeError::UserCancelled) => StatusCode::UNAUTHORIZED,
            AuthError::Handshake(HandshakeError::Malformed(_)) => StatusCode::BAD_REQUEST,
            AuthError::Handshake(HandshakeError::ProviderRejected(_)) => StatusCode::BAD_GATEWAY,
            AuthError::UnknownProvider(_) => StatusCode::NOT_FOUND,
            AuthError::SessionStoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Handshake(HandshakeError::UserCancelled) => ErrorKind::Unauthorized,
            AuthError::Handshake(HandshakeError::Malformed(_)) => ErrorKind::BadRequest,
            AuthError::Handshake(HandshakeError::ProviderRejected(_)) => ErrorKind::BadGateway,
            AuthError::UnknownProvider(_) => ErrorKind::NotFound,
            AuthError::SessionStoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures surface only the reason phrase.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        match self {
            AuthError::SessionStoreUnavailable(_) => AppError::service_unavailable(kind.as_str())
                .with_action("Please try again in a moment"),
            AuthError::Handshake(_) => AppError::new(kind, "Sign-in did not complete")
                .with_action("Please try signing in again"),
            _ if kind.is_server_error() => AppError::new(kind, kind.as_str()),
            _ => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::SessionStoreUnavailable(e) => {
                tracing::error!(error = %e, "Auth store unavailable");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Handshake(HandshakeError::UserCancelled) => {
                tracing::info!("Sign-in cancelled at identity provider");
            }
            AuthError::Handshake(e) => {
                tracing::warn!(error = %e, "Identity provider handshake failed");
            }
            AuthError::UnknownProvider(_) => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
