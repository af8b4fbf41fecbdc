//! Error types for authentication and token management
//!
//! These variants describe failure causes only; the HTTP layer decides the
//! status codes and the messages that go over the wire.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Session missing or expired")]
    SessionMissing,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token not yet valid")]
    NotYetValid,

    #[error("Token not yet within the refresh window")]
    NotNearExpiry,

    #[error("Token generation failed")]
    GenerationFailed,
}
