//! Mock implementation of RecipeListCache for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::recipe::Recipe;
use crate::errors::DomainError;

use super::traits::RecipeListCache;

/// In-memory recipe list cache with switchable failure modes
pub struct MockRecipeListCache {
    entry: Arc<RwLock<Option<Vec<Recipe>>>>,
    fail_get: AtomicBool,
    fail_put: AtomicBool,
    fail_invalidate: AtomicBool,
    puts: AtomicUsize,
    invalidations: AtomicUsize,
}

impl MockRecipeListCache {
    pub fn new() -> Self {
        Self {
            entry: Arc::new(RwLock::new(None)),
            fail_get: AtomicBool::new(false),
            fail_put: AtomicBool::new(false),
            fail_invalidate: AtomicBool::new(false),
            puts: AtomicUsize::new(0),
            invalidations: AtomicUsize::new(0),
        }
    }

    /// Pre-load a snapshot as if a previous list call had populated it
    pub async fn seed(&self, recipes: Vec<Recipe>) {
        *self.entry.write().await = Some(recipes);
    }

    pub async fn snapshot(&self) -> Option<Vec<Recipe>> {
        self.entry.read().await.clone()
    }

    pub fn fail_get(&self) {
        self.fail_get.store(true, Ordering::SeqCst);
    }

    pub fn fail_put(&self) {
        self.fail_put.store(true, Ordering::SeqCst);
    }

    pub fn fail_invalidate(&self) {
        self.fail_invalidate.store(true, Ordering::SeqCst);
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn invalidation_count(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }
}

impl Default for MockRecipeListCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeListCache for MockRecipeListCache {
    async fn get(&self) -> Result<Option<Vec<Recipe>>, DomainError> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(DomainError::Cache {
                message: "injected get failure".to_string(),
            });
        }
        Ok(self.entry.read().await.clone())
    }

    async fn put(&self, recipes: &[Recipe]) -> Result<(), DomainError> {
        if self.fail_put.load(Ordering::SeqCst) {
            return Err(DomainError::Cache {
                message: "injected put failure".to_string(),
            });
        }
        *self.entry.write().await = Some(recipes.to_vec());
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), DomainError> {
        if self.fail_invalidate.load(Ordering::SeqCst) {
            return Err(DomainError::Cache {
                message: "injected invalidate failure".to_string(),
            });
        }
        *self.entry.write().await = None;
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
