//! Claims carried inside the JWT access token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for the given subject, expiring after `ttl`
    pub fn new(subject: impl Into<String>, issuer: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: issuer.into(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Seconds remaining until expiry (negative once expired)
    pub fn seconds_until_expiry(&self) -> i64 {
        self.exp - Utc::now().timestamp()
    }

    /// Expiration as a UTC timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_expire_in_the_future() {
        let claims = Claims::new("admin", "plateful", Duration::minutes(10));

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iss, "plateful");
        assert!(!claims.is_expired());
        assert!(claims.seconds_until_expiry() > 9 * 60);
        assert!(claims.seconds_until_expiry() <= 10 * 60);
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new("admin", "plateful", Duration::seconds(-5));

        assert!(claims.is_expired());
        assert!(claims.seconds_until_expiry() <= -5);
    }

    #[test]
    fn test_expires_at_matches_exp() {
        let claims = Claims::new("admin", "plateful", Duration::minutes(5));

        assert_eq!(claims.expires_at().timestamp(), claims.exp);
    }
}
