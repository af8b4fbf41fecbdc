use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pf_core::domain::IssuedToken;

/// Credentials accepted by `POST /signin`
///
/// Deliberately not validated beyond deserialization: an empty username or
/// password simply fails the credential check with the same 401 as a wrong
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token payload returned by sign-in and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expires: issued.expires_at,
        }
    }
}
