//! Repository traits defining the persistence boundary of the domain layer.
//!
//! Concrete database-backed implementations live in the infrastructure
//! crate; in-memory mocks are exported here for tests.

pub mod recipe;
pub mod user;

// Re-export commonly used types
pub use recipe::{MockRecipeRepository, RecipeRepository};
pub use user::{MockUserRepository, UserRepository};
