//! Unit tests for TokenService issue/verify/refresh behavior

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::default())
}

/// Hand-signs a token with an arbitrary remaining lifetime, bypassing the
/// service so tests can land inside or outside the refresh window.
fn token_expiring_in(seconds: i64, issuer: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "admin".to_string(),
        iat: now,
        exp: now + seconds,
        iss: issuer.to_string(),
    };
    let secret = TokenServiceConfig::default().secret;
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_issue_then_verify_round_trip() {
    let service = service();

    let issued = service.issue("admin").unwrap();
    let claims = service.verify(&issued.token).unwrap();

    assert_eq!(claims.sub, "admin");
    assert_eq!(claims.iss, "plateful");
    assert_eq!(issued.expires_at.timestamp(), claims.exp);

    let remaining = claims.seconds_until_expiry();
    assert!(remaining > 9 * 60);
    assert!(remaining <= 10 * 60);
}

#[test]
fn test_verify_rejects_garbage() {
    let err = service().verify("not-a-token").unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Invalid)));
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let issued = service().issue("admin").unwrap();

    let other = TokenService::new(TokenServiceConfig {
        secret: "a-different-secret".to_string(),
        ..TokenServiceConfig::default()
    });

    let err = other.verify(&issued.token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Invalid)));
}

#[test]
fn test_verify_rejects_wrong_issuer() {
    let token = token_expiring_in(600, "someone-else");

    let err = service().verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Invalid)));
}

#[test]
fn test_verify_rejects_expired() {
    let token = token_expiring_in(-10, "plateful");

    let err = service().verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[test]
fn test_refresh_rejects_fresh_token() {
    let service = service();
    let issued = service.issue("admin").unwrap();

    let err = service.refresh(&issued.token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::NotNearExpiry)));
}

#[test]
fn test_refresh_rejects_token_just_outside_window() {
    let token = token_expiring_in(45, "plateful");

    let err = service().refresh(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::NotNearExpiry)));
}

#[test]
fn test_refresh_accepts_token_inside_window() {
    let service = service();
    let token = token_expiring_in(15, "plateful");

    let refreshed = service.refresh(&token).unwrap();
    let claims = service.verify(&refreshed.token).unwrap();

    assert_eq!(claims.sub, "admin");

    // Refreshed lifetime is the shorter 5 minute one
    let remaining = claims.seconds_until_expiry();
    assert!(remaining > 4 * 60);
    assert!(remaining <= 5 * 60);
}

#[test]
fn test_refresh_rejects_expired_token() {
    let token = token_expiring_in(-10, "plateful");

    let err = service().refresh(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}
