//! Deployment environment detection.

use serde::{Deserialize, Serialize};
use std::env;

/// Which kind of deployment the process is running in.
///
/// Resolved once at startup from `ENVIRONMENT` (or `ENV`); anything
/// unset or unrecognized falls back to [`Environment::Development`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// Resolve the environment from process variables.
    pub fn from_env() -> Self {
        let raw = env::var("ENVIRONMENT").or_else(|_| env::var("ENV"));
        raw.as_deref()
            .unwrap_or("development")
            .parse()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        })
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unrecognized environment: {}", other)),
        }
    }
}
