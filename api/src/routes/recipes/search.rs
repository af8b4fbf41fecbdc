use actix_web::{web, HttpResponse};
use serde::Deserialize;

use pf_core::repositories::{RecipeRepository, UserRepository};
use pf_core::services::RecipeListCache;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Tag to match; an absent parameter behaves like an empty tag
    #[serde(default)]
    pub tag: String,
}

/// Handler for `GET /recipes/search?tag=<tag>`
///
/// Case-insensitive exact match against each recipe's tag list. Always
/// reads the store directly rather than the cached list, and responds
/// with an empty array when nothing matches.
pub async fn search_recipes<R, U, C>(
    state: web::Data<AppState<R, U, C>>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    R: RecipeRepository + 'static,
    U: UserRepository + 'static,
    C: RecipeListCache + 'static,
{
    match state.recipe_service.search_by_tag(&query.tag).await {
        Ok(recipes) => HttpResponse::Ok().json(recipes),
        Err(error) => handle_domain_error(error),
    }
}
