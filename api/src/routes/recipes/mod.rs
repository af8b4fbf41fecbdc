//! Recipe endpoints
//!
//! Reads (`GET /recipes`, `GET /recipes/search`) are open; writes are
//! behind the authentication guard. Every successful write invalidates
//! the cached recipe list before the response goes out.

pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

pub use create::create_recipe;
pub use delete::delete_recipe;
pub use list::list_recipes;
pub use search::search_recipes;
pub use update::update_recipe;
