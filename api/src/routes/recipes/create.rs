use actix_web::{web, HttpResponse};
use validator::Validate;

use pf_core::repositories::{RecipeRepository, UserRepository};
use pf_core::services::RecipeListCache;

use crate::app::AppState;
use crate::dto::{CreateRecipeResponse, RecipePayload};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

/// Handler for `POST /recipes`
///
/// Persists a new recipe, assigning it an identifier and publication
/// timestamp, and drops the cached recipe list so the next read sees the
/// write.
///
/// # Response (200 OK)
/// ```json
/// {
///     "message": "New recipe added with id 5f4d...",
///     "recipeID": "5f4d..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed body or empty recipe name
/// - 401/403: authentication failure (strategy-dependent)
/// - 500 Internal Server Error: store write or cache invalidation failure
pub async fn create_recipe<R, U, C>(
    state: web::Data<AppState<R, U, C>>,
    auth: AuthContext,
    payload: web::Json<RecipePayload>,
) -> HttpResponse
where
    R: RecipeRepository + 'static,
    U: UserRepository + 'static,
    C: RecipeListCache + 'static,
{
    let payload = payload.into_inner();
    if let Err(errors) = payload.validate() {
        return handle_validation_errors(&errors);
    }

    match state.recipe_service.create(payload.into()).await {
        Ok(recipe) => {
            log::debug!("recipe {} created by {}", recipe.id, auth.username);
            HttpResponse::Ok().json(CreateRecipeResponse {
                message: format!("New recipe added with id {}", recipe.id),
                recipe_id: recipe.id.to_string(),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
