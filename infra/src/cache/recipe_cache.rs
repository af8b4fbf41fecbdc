//! Redis-backed implementation of the recipe list cache
//!
//! The full recipe list is stored serialized under a single well-known key
//! with no expiry; invalidation deletes the key.

use async_trait::async_trait;
use tracing::debug;

use pf_core::domain::entities::recipe::Recipe;
use pf_core::errors::DomainError;
use pf_core::services::recipe::RecipeListCache;

use super::redis_client::RedisClient;

/// Redis implementation of RecipeListCache
pub struct RedisRecipeCache {
    client: RedisClient,
    /// Resolved cache key, prefix already applied
    key: String,
}

impl RedisRecipeCache {
    /// Create a recipe cache over an existing Redis client
    ///
    /// The cache key comes from the client's configuration so deployments
    /// sharing a Redis instance can prefix their keys.
    pub fn new(client: RedisClient) -> Self {
        let key = client.config().recipe_list_key();
        Self { client, key }
    }
}

#[async_trait]
impl RecipeListCache for RedisRecipeCache {
    async fn get(&self) -> Result<Option<Vec<Recipe>>, DomainError> {
        let raw = self.client.get(&self.key).await?;

        match raw {
            Some(json) => {
                let recipes: Vec<Recipe> =
                    serde_json::from_str(&json).map_err(|e| DomainError::Cache {
                        message: format!("Malformed cached recipe list: {}", e),
                    })?;
                debug!(count = recipes.len(), "recipe list cache hit");
                Ok(Some(recipes))
            }
            None => {
                debug!("recipe list cache miss");
                Ok(None)
            }
        }
    }

    async fn put(&self, recipes: &[Recipe]) -> Result<(), DomainError> {
        let json = serde_json::to_string(recipes).map_err(|e| DomainError::Cache {
            message: format!("Failed to serialize recipe list: {}", e),
        })?;

        self.client.set(&self.key, &json).await?;
        debug!(count = recipes.len(), "recipe list cache populated");
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), DomainError> {
        self.client.delete(&self.key).await?;
        debug!("recipe list cache invalidated");
        Ok(())
    }
}
