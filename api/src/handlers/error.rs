//! Translation of domain failures into HTTP responses
//!
//! Single funnel for every route handler: domain errors map onto the wire
//! contract's status codes and `{"error": ...}` bodies here, so the
//! handlers never build error responses themselves.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use pf_core::errors::{AuthError, DomainError, TokenError};
use pf_shared::ErrorBody;

/// Maps a [`DomainError`] onto the status code and body the API promises.
///
/// Credential failures share one message regardless of whether the
/// username or the password was wrong.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Invalid Username or Password"))
        }
        DomainError::Auth(AuthError::SessionMissing) | DomainError::Forbidden => {
            HttpResponse::Forbidden().json(ErrorBody::new("Not logged"))
        }
        DomainError::Token(TokenError::NotNearExpiry) => {
            HttpResponse::BadRequest().json(ErrorBody::new("Token is not expired yet"))
        }
        DomainError::Token(TokenError::Expired) => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Token expired"))
        }
        DomainError::Token(TokenError::GenerationFailed) => {
            log::error!("token generation failed");
            HttpResponse::InternalServerError().json(ErrorBody::new("Could not issue token"))
        }
        DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Invalid token"))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorBody::new(message))
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorBody::new(format!("{} not found", resource)))
        }
        DomainError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Unauthorized"))
        }
        DomainError::Database { message }
        | DomainError::Cache { message }
        | DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorBody::new(message))
        }
    }
}

/// Renders request validation failures as a 400 with the field messages.
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join("; ");
    HttpResponse::BadRequest().json(ErrorBody::new(message))
}
