//! Database access layer
//!
//! Connection pooling plus the MySQL implementations of the repository
//! traits defined in the core crate.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlRecipeRepository, MySqlUserRepository};
