//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Plateful
//! application, following Clean Architecture principles. It provides the
//! concrete implementations behind the repository and cache traits owned by
//! the core crate.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL repository implementations using SQLx
//! - **Cache**: Redis client and the recipe list cache

// Re-export core error types for convenience
pub use pf_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and operations
pub mod cache;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::Database {
                message: e.to_string(),
            },
            InfrastructureError::Cache(e) => DomainError::Cache {
                message: e.to_string(),
            },
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
