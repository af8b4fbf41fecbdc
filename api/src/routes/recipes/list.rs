use actix_web::{web, HttpResponse};

use pf_core::repositories::{RecipeRepository, UserRepository};
use pf_core::services::RecipeListCache;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for `GET /recipes`
///
/// Serves the cached recipe list when present, otherwise reads the store
/// and repopulates the cache. Responds with the full recipe array.
pub async fn list_recipes<R, U, C>(state: web::Data<AppState<R, U, C>>) -> HttpResponse
where
    R: RecipeRepository + 'static,
    U: UserRepository + 'static,
    C: RecipeListCache + 'static,
{
    match state.recipe_service.list().await {
        Ok(recipes) => HttpResponse::Ok().json(recipes),
        Err(error) => handle_domain_error(error),
    }
}
