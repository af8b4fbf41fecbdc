//! Unit tests for RecipeService CRUD, search and cache interplay

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::recipe::{Recipe, RecipeDraft};
use crate::errors::DomainError;
use crate::repositories::{MockRecipeRepository, RecipeRepository};
use crate::services::recipe::{MockRecipeListCache, RecipeService};

fn draft(name: &str, tags: &[&str]) -> RecipeDraft {
    RecipeDraft {
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ingredients: vec!["salt".to_string()],
        instructions: vec!["mix".to_string()],
    }
}

fn setup() -> (
    RecipeService<MockRecipeRepository, MockRecipeListCache>,
    Arc<MockRecipeRepository>,
    Arc<MockRecipeListCache>,
) {
    let repository = Arc::new(MockRecipeRepository::new());
    let cache = Arc::new(MockRecipeListCache::new());
    let service = RecipeService::new(Arc::clone(&repository), Arc::clone(&cache));
    (service, repository, cache)
}

#[tokio::test]
async fn test_create_persists_and_invalidates() {
    let (service, repository, cache) = setup();
    cache.seed(vec![]).await;

    let created = service.create(draft("Carbonara", &["italian"])).await.unwrap();

    assert_eq!(created.name, "Carbonara");
    assert!(!created.id.is_nil());
    assert_eq!(repository.len().await, 1);
    assert_eq!(cache.invalidation_count(), 1);
    assert!(cache.snapshot().await.is_none());
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let (service, repository, cache) = setup();

    let err = service.create(draft("   ", &[])).await.unwrap_err();

    assert!(matches!(err, DomainError::Validation { .. }));
    assert!(repository.is_empty().await);
    assert_eq!(cache.invalidation_count(), 0);
}

#[tokio::test]
async fn test_list_populates_cache_on_miss() {
    let (service, repository, cache) = setup();
    repository.create(Recipe::new(draft("A", &[]))).await.unwrap();
    repository.create(Recipe::new(draft("B", &[]))).await.unwrap();

    let listed = service.list().await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(cache.put_count(), 1);
    assert_eq!(cache.snapshot().await.map(|s| s.len()), Some(2));
}

#[tokio::test]
async fn test_list_serves_cached_snapshot() {
    let (service, repository, _cache) = setup();
    repository.create(Recipe::new(draft("A", &[]))).await.unwrap();

    assert_eq!(service.list().await.unwrap().len(), 1);

    // A write that bypasses the service is invisible until invalidation
    repository.create(Recipe::new(draft("B", &[]))).await.unwrap();
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_swallows_populate_failure() {
    let (service, repository, cache) = setup();
    repository.create(Recipe::new(draft("A", &[]))).await.unwrap();
    cache.fail_put();

    let listed = service.list().await.unwrap();

    assert_eq!(listed.len(), 1);
    assert!(cache.snapshot().await.is_none());
}

#[tokio::test]
async fn test_list_surfaces_cache_read_failure() {
    let (service, _repository, cache) = setup();
    cache.fail_get();

    let err = service.list().await.unwrap_err();
    assert!(matches!(err, DomainError::Cache { .. }));
}

#[tokio::test]
async fn test_write_surfaces_invalidate_failure() {
    let (service, repository, cache) = setup();
    cache.fail_invalidate();

    let err = service.create(draft("A", &[])).await.unwrap_err();

    assert!(matches!(err, DomainError::Cache { .. }));
    // The record was persisted before the cache step failed
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_update_replaces_fields_and_invalidates() {
    let (service, repository, cache) = setup();
    let created = service.create(draft("Before", &["old"])).await.unwrap();

    service
        .update(created.id, draft("After", &["new"]))
        .await
        .unwrap();

    let all = repository.find_all().await.unwrap();
    assert_eq!(all[0].name, "After");
    assert_eq!(all[0].tags, vec!["new"]);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].published_at, created.published_at);
    assert_eq!(cache.invalidation_count(), 2);
}

#[tokio::test]
async fn test_update_missing_recipe() {
    let (service, _repository, cache) = setup();

    let err = service
        .update(Uuid::new_v4(), draft("Ghost", &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { .. }));
    assert_eq!(cache.invalidation_count(), 0);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let (service, _repository, cache) = setup();
    let created = service.create(draft("Gone", &[])).await.unwrap();

    service.delete(created.id).await.unwrap();
    assert_eq!(cache.invalidation_count(), 2);

    let err = service.delete(created.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert_eq!(cache.invalidation_count(), 2);
}

#[tokio::test]
async fn test_write_then_list_is_fresh() {
    let (service, _repository, _cache) = setup();

    service.create(draft("A", &[])).await.unwrap();
    assert_eq!(service.list().await.unwrap().len(), 1);

    service.create(draft("B", &[])).await.unwrap();
    let listed = service.list().await.unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_search_by_tag_case_insensitive() {
    let (service, _repository, _cache) = setup();
    service.create(draft("Carbonara", &["Italian", "pasta"])).await.unwrap();
    service.create(draft("Quiche", &["french"])).await.unwrap();

    let found = service.search_by_tag("ITALIAN").await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Carbonara");
}

#[tokio::test]
async fn test_search_reads_the_store_not_the_cache() {
    let (service, repository, cache) = setup();
    repository
        .create(Recipe::new(draft("Fresh", &["new"])))
        .await
        .unwrap();
    // A stale snapshot must not leak into search results
    cache.seed(vec![]).await;

    let found = service.search_by_tag("new").await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_search_without_match_returns_empty() {
    let (service, _repository, _cache) = setup();
    service.create(draft("Carbonara", &["italian"])).await.unwrap();

    assert!(service.search_by_tag("nordic").await.unwrap().is_empty());
    assert!(service.search_by_tag("").await.unwrap().is_empty());
}
