//! Redis cache implementations
//!
//! The Redis client handles connection management and retries; the recipe
//! cache layers the domain's list-snapshot contract on top of it.

pub mod recipe_cache;
pub mod redis_client;

pub use recipe_cache::RedisRecipeCache;
pub use redis_client::RedisClient;
