//! Shared utilities and common types for the Plateful server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Common response body shapes

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, AuthStrategy, CacheConfig, DatabaseConfig, Environment, JwtConfig,
    ServerConfig, SessionConfig,
};
pub use types::{ErrorBody, MessageBody};
