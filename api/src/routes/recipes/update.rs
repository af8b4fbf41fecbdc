use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use pf_core::repositories::{RecipeRepository, UserRepository};
use pf_core::services::RecipeListCache;
use pf_shared::{ErrorBody, MessageBody};

use crate::app::AppState;
use crate::dto::RecipePayload;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

/// Handler for `PUT /recipes/{id}`
///
/// Replaces the name, tags, ingredients, and instructions of the recipe.
/// The identifier and publication timestamp never change.
///
/// ## Errors
/// - 400 Bad Request: malformed body or empty recipe name
/// - 404 Not Found: unknown or malformed recipe id
pub async fn update_recipe<R, U, C>(
    state: web::Data<AppState<R, U, C>>,
    path: web::Path<String>,
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

    // A malformed id can never name a stored recipe
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().json(ErrorBody::new("Recipe not found")),
    };

    match state.recipe_service.update(id, payload.into()).await {
        Ok(()) => HttpResponse::Ok().json(MessageBody::new("Recipe has been updated")),
        Err(error) => handle_domain_error(error),
    }
}
