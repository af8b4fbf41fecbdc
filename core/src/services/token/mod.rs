//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Access token generation and verification (HS256)
//! - Near-expiry refresh of still-valid tokens

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
