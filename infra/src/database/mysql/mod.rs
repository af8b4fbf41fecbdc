//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of the repository traits
//! using SQLx for database operations.

pub mod recipe_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use recipe_repository_impl::MySqlRecipeRepository;
pub use user_repository_impl::MySqlUserRepository;
