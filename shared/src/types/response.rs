//! Wire-level response body shapes
//!
//! Every error leaving the API uses the single-field `{"error": ...}` shape;
//! informational responses use `{"message": ...}`. Both are defined here so
//! handlers, middleware, and integration tests agree on the exact contract.

use serde::{Deserialize, Serialize};

/// Error payload returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Informational payload for responses that carry only a message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    /// Human-readable outcome description
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
