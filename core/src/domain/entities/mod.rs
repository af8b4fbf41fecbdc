//! Domain entities representing core business objects.

pub mod recipe;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use recipe::{Recipe, RecipeDraft};
pub use token::Claims;
pub use user::User;
