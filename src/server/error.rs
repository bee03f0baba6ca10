//! Error-to-HTTP response conversion.
//!
//! Wraps [`movie_server_rotation::Error`] so route handlers can return
//! `Result<Response, ApiError>` and get a status code plus a JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movie_server_rotation::Error;
use serde_json::json;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Failed to serve movie");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Rejected movie request");
        }

        let body = json!({
            "error": self.0.to_string(),
            "code": self.0.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_produces_404() {
        let response = ApiError(Error::UnknownCategory("foo".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_phase_produces_400() {
        let response = ApiError(Error::UnknownPhase("middle".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn no_media_produces_503() {
        let response = ApiError::from(Error::no_media("intro")).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
