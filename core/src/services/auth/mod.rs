//! Authentication service module
//!
//! This module provides credential verification and both sign-in flavors:
//! - Bearer: issue a short-lived JWT access token
//! - Session: mint an opaque token for the HTTP session layer to persist

mod service;

#[cfg(test)]
mod tests;

pub use service::{hash_password, AuthService};
