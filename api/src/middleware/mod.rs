//! HTTP middleware
//!
//! - `auth`: write-route guard covering both authentication strategies
//! - `cors`: environment-keyed CORS policy
//! - `security`: hardening headers on every response

pub mod auth;
pub mod cors;
pub mod security;

pub use auth::{AuthContext, AuthGuard};
pub use cors::create_cors;
pub use security::SecurityHeaders;
