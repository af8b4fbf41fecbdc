//! Configuration for the token service

use pf_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret (HS256)
    pub secret: String,
    /// Issuer claim stamped into and required from every token
    pub issuer: String,
    /// Lifetime of a token issued at sign-in, in minutes
    pub token_ttl_minutes: i64,
    /// How close to expiry a token must be before it can be refreshed,
    /// in seconds
    pub refresh_window_seconds: i64,
    /// Lifetime of a refreshed token, in minutes
    pub refreshed_ttl_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            issuer: "plateful".to_string(),
            token_ttl_minutes: 10,
            refresh_window_seconds: 30,
            refreshed_ttl_minutes: 5,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            issuer: config.issuer.clone(),
            token_ttl_minutes: config.token_ttl_minutes,
            refresh_window_seconds: config.refresh_window_seconds,
            refreshed_ttl_minutes: config.refreshed_ttl_minutes,
        }
    }
}
