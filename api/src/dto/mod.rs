//! Request and response body types

pub mod auth;
pub mod recipe;

pub use auth::{SignInRequest, TokenResponse};
pub use recipe::{CreateRecipeResponse, RecipePayload};
