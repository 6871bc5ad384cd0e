//! Error conversions
//!
//! Rendering of [`AppError`] as an HTTP response (feature `axum`).

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use crate::html::escape;
        use axum::http::StatusCode;
        use axum::response::Html;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let action = self
            .action()
            .map(|a| format!("<p>{}</p>", escape(a)))
            .unwrap_or_default();

        let body = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><title>{title}</title></head>
<body>
  <h1>{code} {title}</h1>
  <p>{detail}</p>
  {action}
  <p><a href="/">Back to home</a></p>
</body>
</html>"#,
            code = self.status_code(),
            title = self.kind().as_str(),
            detail = escape(self.message()),
        );

        (status, Html(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_into_response_status() {
        let response = AppError::service_unavailable("down").into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = AppError::new(ErrorKind::NotFound, "missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
