//! Transport-level errors raised outside handler bodies
//!
//! Handlers translate domain failures through
//! [`crate::handlers::error::handle_domain_error`]. Middleware and
//! extractors have to produce an `actix_web::Error` instead; this type
//! makes those paths emit the same `{"error": ...}` JSON body rather than
//! actix's plain-text default.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use pf_shared::ErrorBody;
use thiserror::Error;

/// Errors produced by the middleware stack and request extractors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::unauthorized("nope").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::forbidden("Not logged").status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_error_response_uses_error_body() {
        let response = ApiError::forbidden("Not logged").error_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Not logged");
    }
}
