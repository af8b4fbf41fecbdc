//! Mock implementation of RecipeRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::recipe::{Recipe, RecipeDraft};
use crate::errors::DomainError;

use super::trait_::RecipeRepository;

/// Mock recipe repository for testing
///
/// Keeps recipes in insertion order so list assertions stay deterministic.
#[derive(Clone)]
pub struct MockRecipeRepository {
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl MockRecipeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            recipes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored recipes
    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }
}

impl Default for MockRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeRepository for MockRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError> {
        let mut recipes = self.recipes.write().await;
        recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, DomainError> {
        let recipes = self.recipes.read().await;
        Ok(recipes.clone())
    }

    async fn update(&self, id: Uuid, draft: &RecipeDraft) -> Result<bool, DomainError> {
        let mut recipes = self.recipes.write().await;
        match recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.apply(draft.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut recipes = self.recipes.write().await;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        Ok(recipes.len() < before)
    }
}
