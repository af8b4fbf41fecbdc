//! Redis connection settings and the cache key namespace.

use serde::{Deserialize, Serialize};

/// Key under which the serialized recipe list snapshot is cached
pub const RECIPE_LIST_KEY: &str = "recipes";

const DEFAULT_URL: &str = "redis://localhost:6379";

/// How to reach Redis and how keys are namespaced.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    pub url: String,
    /// Connection attempts before the client gives up.
    pub max_retries: u32,
    /// Base delay between attempts, in milliseconds.
    pub retry_delay_ms: u64,
    /// Prepended to every key when set, `prefix:key`.
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            max_retries: 3,
            retry_delay_ms: 100,
            key_prefix: None,
        }
    }
}

impl CacheConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Read `REDIS_URL` and `REDIS_MAX_RETRIES`.
    pub fn from_env() -> Self {
        Self {
            url: super::env_string("REDIS_URL", DEFAULT_URL),
            max_retries: super::env_parse("REDIS_MAX_RETRIES", 3),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Apply the configured prefix to a bare key.
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }

    /// Key holding the cached recipe list snapshot.
    pub fn recipe_list_key(&self) -> String {
        self.make_key(RECIPE_LIST_KEY)
    }
}
