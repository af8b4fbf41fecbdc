//! Main recipe catalogue service implementation

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::recipe::{Recipe, RecipeDraft};
use crate::errors::DomainError;
use crate::repositories::RecipeRepository;

use super::traits::RecipeListCache;

/// Service for recipe CRUD and tag search
///
/// Reads of the full list go through the cache; every successful write
/// invalidates the cached snapshot before returning, so the cache is never
/// stale for longer than one write cycle.
pub struct RecipeService<R: RecipeRepository, C: RecipeListCache> {
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R: RecipeRepository, C: RecipeListCache> RecipeService<R, C> {
    /// Creates a new recipe service
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }

    /// Persists a new recipe and invalidates the cached list
    ///
    /// The identifier and publish timestamp are assigned here; the draft
    /// carries only caller-controlled fields.
    pub async fn create(&self, draft: RecipeDraft) -> Result<Recipe, DomainError> {
        validate_draft(&draft)?;

        let recipe = self.repository.create(Recipe::new(draft)).await?;
        self.cache.invalidate().await?;

        debug!(recipe_id = %recipe.id, "recipe created");
        Ok(recipe)
    }

    /// Returns every recipe, served from the cache when possible
    ///
    /// On a miss the store result is written back with no expiry. A failed
    /// write-back is logged and swallowed; the store result is still served.
    pub async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        if let Some(recipes) = self.cache.get().await? {
            debug!(count = recipes.len(), "serving recipe list from cache");
            return Ok(recipes);
        }

        let recipes = self.repository.find_all().await?;
        if let Err(e) = self.cache.put(&recipes).await {
            warn!(error = %e, "failed to populate recipe list cache");
        }
        Ok(recipes)
    }

    /// Replaces the mutable fields of an existing recipe
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Updated; the cached list was invalidated
    /// * `Err(DomainError::NotFound)` - No recipe with the given id
    pub async fn update(&self, id: Uuid, draft: RecipeDraft) -> Result<(), DomainError> {
        validate_draft(&draft)?;

        if !self.repository.update(id, &draft).await? {
            return Err(DomainError::NotFound {
                resource: "Recipe".to_string(),
            });
        }
        self.cache.invalidate().await?;

        debug!(recipe_id = %id, "recipe updated");
        Ok(())
    }

    /// Deletes a recipe by id
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Deleted; the cached list was invalidated
    /// * `Err(DomainError::NotFound)` - No recipe with the given id
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: "Recipe".to_string(),
            });
        }
        self.cache.invalidate().await?;

        debug!(recipe_id = %id, "recipe deleted");
        Ok(())
    }

    /// Returns all recipes carrying the given tag, ignoring ASCII case
    ///
    /// Always reads the store directly; an empty result is not an error.
    pub async fn search_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, DomainError> {
        let recipes = self.repository.find_all().await?;
        Ok(recipes.into_iter().filter(|r| r.has_tag(tag)).collect())
    }
}

fn validate_draft(draft: &RecipeDraft) -> Result<(), DomainError> {
    if draft.name.trim().is_empty() {
        return Err(DomainError::Validation {
            message: "Recipe name must not be empty".to_string(),
        });
    }
    Ok(())
}
