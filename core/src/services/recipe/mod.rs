//! Recipe catalogue service module
//!
//! CRUD plus tag search over the recipe store, with a cached snapshot of
//! the full list that every successful write invalidates.

mod mock;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use mock::MockRecipeListCache;
pub use service::RecipeService;
pub use traits::RecipeListCache;
