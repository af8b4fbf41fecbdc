//! Main authentication service implementation

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::domain::entities::user::User;
use crate::domain::value_objects::IssuedToken;
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Length of the opaque token minted for cookie sessions
const SESSION_TOKEN_LENGTH: usize = 32;

/// Service handling credential checks and sign-in
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Verifies a username/password pair against the stored bcrypt hash
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller: both fail with `AuthError::InvalidCredentials`.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Signs a user in and issues a bearer access token
    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<IssuedToken, DomainError> {
        let user = self.verify_credentials(username, password).await?;
        debug!(username = %user.username, "issuing access token");
        self.token_service.issue(&user.username)
    }

    /// Signs a user in and mints an opaque session token
    ///
    /// The caller is responsible for persisting the token into the HTTP
    /// session alongside the username.
    pub async fn sign_in_session(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, DomainError> {
        let user = self.verify_credentials(username, password).await?;
        debug!(username = %user.username, "opening session");
        Ok(Self::generate_session_token())
    }

    /// Exchanges a near-expiry bearer token for a fresh one
    pub fn refresh(&self, token: &str) -> Result<IssuedToken, DomainError> {
        self.token_service.refresh(token)
    }

    /// Generates a random alphanumeric session token
    fn generate_session_token() -> String {
        let mut rng = rand::thread_rng();
        (0..SESSION_TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0u8..62);
                let byte = match idx {
                    0..=9 => b'0' + idx,
                    10..=35 => b'a' + (idx - 10),
                    _ => b'A' + (idx - 36),
                };
                byte as char
            })
            .collect()
    }
}

/// Hashes a plaintext password with bcrypt at the default cost
///
/// A free function rather than a method so the user seeding binary can
/// hash without assembling the full service.
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}
