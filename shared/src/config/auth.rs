//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";
const DEFAULT_SESSION_SECRET: &str = "development-session-secret-please-change-in-production";

/// Which authentication strategy guards the write endpoints.
///
/// Bearer tokens and cookie sessions are alternatives, not layers: exactly
/// one is active per deployment, selected at application construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategy {
    /// Stateless signed tokens carried in the Authorization header
    Bearer,
    /// Server-tracked opaque tokens keyed by a session cookie
    Session,
}

impl Default for AuthStrategy {
    fn default() -> Self {
        AuthStrategy::Bearer
    }
}

impl std::fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthStrategy::Bearer => write!(f, "bearer"),
            AuthStrategy::Session => write!(f, "session"),
        }
    }
}

impl std::str::FromStr for AuthStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bearer" | "jwt" | "token" => Ok(AuthStrategy::Bearer),
            "session" | "cookie" => Ok(AuthStrategy::Session),
            _ => Err(format!("Invalid auth strategy: {}", s)),
        }
    }
}

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,

    /// Token lifetime at sign-in, in minutes
    pub token_ttl_minutes: i64,

    /// Refresh is only permitted when remaining validity is at or below
    /// this many seconds
    pub refresh_window_seconds: i64,

    /// Lifetime of a refreshed token, in minutes
    pub refreshed_ttl_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string(),
            issuer: String::from("plateful"),
            token_ttl_minutes: 10,
            refresh_window_seconds: 30,
            refreshed_ttl_minutes: 5,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the sign-in token lifetime in minutes
    pub fn with_token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = minutes;
        self
    }

    /// Set the refresh window in seconds
    pub fn with_refresh_window_seconds(mut self, seconds: i64) -> Self {
        self.refresh_window_seconds = seconds;
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session cookie name
    pub cookie_name: String,

    /// Secret the cookie signing key is derived from
    pub secret: String,

    /// Session lifetime in hours
    pub ttl_hours: i64,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Session cookie HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("session"),
            secret: DEFAULT_SESSION_SECRET.to_string(),
            ttl_hours: 2,
            secure: false,
            http_only: default_http_only(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Active authentication strategy
    #[serde(default)]
    pub strategy: AuthStrategy,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            strategy: AuthStrategy::default(),
            jwt: JwtConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Read `AUTH_STRATEGY`, the JWT variables and the session variables.
    pub fn from_env() -> Self {
        let strategy = super::env_string("AUTH_STRATEGY", "bearer")
            .parse()
            .unwrap_or_default();
        let cookie_secure = std::env::var("SESSION_COOKIE_SECURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            strategy,
            jwt: JwtConfig {
                secret: super::env_string("JWT_SECRET", DEFAULT_JWT_SECRET),
                token_ttl_minutes: super::env_parse("JWT_TOKEN_TTL_MINUTES", 10),
                ..Default::default()
            },
            session: SessionConfig {
                secret: super::env_string("SESSION_SECRET", DEFAULT_SESSION_SECRET),
                secure: cookie_secure,
                ..Default::default()
            },
        }
    }

    /// Get the JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

fn default_http_only() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_ttl_minutes, 10);
        assert_eq!(config.refresh_window_seconds, 30);
        assert_eq!(config.refreshed_ttl_minutes, 5);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_token_ttl_minutes(20)
            .with_refresh_window_seconds(60);

        assert_eq!(config.token_ttl_minutes, 20);
        assert_eq!(config.refresh_window_seconds, 60);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_session_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "session");
        assert_eq!(config.ttl_hours, 2);
        assert!(config.http_only);
        assert!(!config.secure);
    }

    #[test]
    fn test_auth_strategy_parsing() {
        assert_eq!("bearer".parse::<AuthStrategy>(), Ok(AuthStrategy::Bearer));
        assert_eq!("JWT".parse::<AuthStrategy>(), Ok(AuthStrategy::Bearer));
        assert_eq!("session".parse::<AuthStrategy>(), Ok(AuthStrategy::Session));
        assert_eq!("cookie".parse::<AuthStrategy>(), Ok(AuthStrategy::Session));
        assert!("basic".parse::<AuthStrategy>().is_err());
    }

    #[test]
    fn test_auth_config_default_strategy() {
        let config = AuthConfig::default();
        assert_eq!(config.strategy, AuthStrategy::Bearer);
    }
}
