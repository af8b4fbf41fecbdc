//! Result of a successful token issuance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A freshly signed access token together with its expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The signed JWT string
    pub token: String,

    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }
}
