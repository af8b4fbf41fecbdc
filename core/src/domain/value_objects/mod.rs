//! Value objects representing immutable domain concepts.

pub mod issued_token;

// Re-export commonly used types
pub use issued_token::IssuedToken;
