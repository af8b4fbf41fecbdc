//! Unit tests for AuthService sign-in flows

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::MockUserRepository;
use crate::services::auth::{hash_password, AuthService};
use crate::services::token::{TokenService, TokenServiceConfig};

/// Low bcrypt cost keeps these tests fast; verification accepts any cost.
const TEST_BCRYPT_COST: u32 = 4;

async fn service_with_admin() -> AuthService<MockUserRepository> {
    let hash = bcrypt::hash("passadmin", TEST_BCRYPT_COST).unwrap();
    let repo = MockUserRepository::with_users(vec![User::new("admin", hash)]).await;
    AuthService::new(
        Arc::new(repo),
        Arc::new(TokenService::new(TokenServiceConfig::default())),
    )
}

#[tokio::test]
async fn test_sign_in_issues_verifiable_token() {
    let service = service_with_admin().await;

    let issued = service.sign_in("admin", "passadmin").await.unwrap();

    let token_service = TokenService::new(TokenServiceConfig::default());
    let claims = token_service.verify(&issued.token).unwrap();
    assert_eq!(claims.sub, "admin");
    assert!(issued.expires_at > chrono::Utc::now());
}

#[tokio::test]
async fn test_sign_in_unknown_user() {
    let service = service_with_admin().await;

    let err = service.sign_in("ghost", "passadmin").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    let service = service_with_admin().await;

    let err = service.sign_in("admin", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_verify_credentials_returns_user() {
    let service = service_with_admin().await;

    let user = service
        .verify_credentials("admin", "passadmin")
        .await
        .unwrap();
    assert_eq!(user.username, "admin");
}

#[tokio::test]
async fn test_session_sign_in_mints_opaque_token() {
    let service = service_with_admin().await;

    let first = service
        .sign_in_session("admin", "passadmin")
        .await
        .unwrap();
    let second = service
        .sign_in_session("admin", "passadmin")
        .await
        .unwrap();

    assert_eq!(first.len(), 32);
    assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_session_sign_in_rejects_bad_credentials() {
    let service = service_with_admin().await;

    let err = service
        .sign_in_session("admin", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_hash_password_verifies() {
    let hash = hash_password("s3cret").unwrap();

    assert!(bcrypt::verify("s3cret", &hash).unwrap());
    assert!(!bcrypt::verify("other", &hash).unwrap());
}
