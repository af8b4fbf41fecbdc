//! Business services containing domain logic and use cases.

pub mod auth;
pub mod recipe;
pub mod token;

// Re-export commonly used types
pub use auth::{hash_password, AuthService};
pub use recipe::{MockRecipeListCache, RecipeListCache, RecipeService};
pub use token::{TokenService, TokenServiceConfig};
