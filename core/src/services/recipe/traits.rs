//! Trait for the recipe list cache integration

use async_trait::async_trait;

use crate::domain::entities::recipe::Recipe;
use crate::errors::DomainError;

/// Trait for the cached snapshot of the full recipe list
///
/// Implementations hold at most one entry: the serialized result of the
/// latest full-list query.
#[async_trait]
pub trait RecipeListCache: Send + Sync {
    /// Fetch the cached list, `None` on a miss
    async fn get(&self) -> Result<Option<Vec<Recipe>>, DomainError>;
    /// Store the list snapshot with no expiry
    async fn put(&self, recipes: &[Recipe]) -> Result<(), DomainError>;
    /// Drop the cached snapshot
    async fn invalidate(&self) -> Result<(), DomainError>;
}
