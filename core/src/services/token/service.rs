//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::IssuedToken;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing, verifying and refreshing JWT access tokens
///
/// Stateless: tokens carry everything needed for verification, nothing is
/// persisted server-side.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        // Exact expiry; the default 60s leeway is wider than the refresh window
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a fresh token for the given subject with the sign-in lifetime
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token plus its expiry
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, username: &str) -> Result<IssuedToken, DomainError> {
        self.sign(username, Duration::minutes(self.config.token_ttl_minutes))
    }

    /// Verifies a token's signature, issuer and expiry, returning its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims
    /// * `Err(DomainError::Token)` - Expired, not yet valid, or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                _ => TokenError::Invalid,
            })?;
        Ok(data.claims)
    }

    /// Exchanges a still-valid token close to its expiry for a new one
    ///
    /// The incoming token must verify, and must have at most
    /// `refresh_window_seconds` of validity left. The replacement carries the
    /// same subject with the (shorter) refreshed lifetime.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The replacement token
    /// * `Err(DomainError::Token(TokenError::NotNearExpiry))` - Too early
    /// * `Err(DomainError::Token(_))` - The token failed verification
    pub fn refresh(&self, token: &str) -> Result<IssuedToken, DomainError> {
        let claims = self.verify(token)?;

        if claims.seconds_until_expiry() > self.config.refresh_window_seconds {
            return Err(TokenError::NotNearExpiry.into());
        }

        self.sign(
            &claims.sub,
            Duration::minutes(self.config.refreshed_ttl_minutes),
        )
    }

    fn sign(&self, username: &str, ttl: Duration) -> Result<IssuedToken, DomainError> {
        let claims = Claims::new(username, self.config.issuer.clone(), ttl);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)?;
        Ok(IssuedToken::new(token, claims.expires_at()))
    }
}
