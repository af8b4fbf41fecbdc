//! Recipe repository trait defining the interface for recipe persistence.
//!
//! The trait is async-first and keeps the abstraction boundary between the
//! domain and infrastructure layers: services never see the database driver.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::recipe::{Recipe, RecipeDraft};
use crate::errors::DomainError;

/// Repository trait for Recipe entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use pf_core::repositories::RecipeRepository;
/// use pf_core::domain::entities::recipe::{Recipe, RecipeDraft};
/// use pf_core::errors::DomainError;
///
/// struct MySqlRecipeRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl RecipeRepository for MySqlRecipeRepository {
///     async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError> {
///         // Implementation here
///         Ok(recipe)
///     }
///
///     async fn find_all(&self) -> Result<Vec<Recipe>, DomainError> {
///         Ok(Vec::new())
///     }
///
///     async fn update(&self, id: Uuid, draft: &RecipeDraft) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///
///     async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
///         Ok(false)
///     }
/// }
/// ```
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Persist a new recipe
    ///
    /// # Returns
    /// * `Ok(Recipe)` - The stored recipe, unchanged
    /// * `Err(DomainError)` - Database or other error occurred
    async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError>;

    /// Fetch every stored recipe
    async fn find_all(&self) -> Result<Vec<Recipe>, DomainError>;

    /// Replace the mutable fields of an existing recipe
    ///
    /// The identifier and publish timestamp are never touched.
    ///
    /// # Returns
    /// * `Ok(true)` - A record matched and was updated
    /// * `Ok(false)` - No record with the given id exists
    /// * `Err(DomainError)` - Database or other error occurred
    async fn update(&self, id: Uuid, draft: &RecipeDraft) -> Result<bool, DomainError>;

    /// Delete a recipe by id
    ///
    /// # Returns
    /// * `Ok(true)` - A record matched and was deleted
    /// * `Ok(false)` - No record with the given id exists
    /// * `Err(DomainError)` - Database or other error occurred
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
