use actix_web::{web, HttpResponse};
use uuid::Uuid;

use pf_core::repositories::{RecipeRepository, UserRepository};
use pf_core::services::RecipeListCache;
use pf_shared::{ErrorBody, MessageBody};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for `DELETE /recipes/{id}`
///
/// Removes the recipe and invalidates the cached list.
///
/// ## Errors
/// - 404 Not Found: unknown or malformed recipe id
pub async fn delete_recipe<R, U, C>(
    state: web::Data<AppState<R, U, C>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: RecipeRepository + 'static,
    U: UserRepository + 'static,
    C: RecipeListCache + 'static,
{
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().json(ErrorBody::new("Recipe not found")),
    };

    match state.recipe_service.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(MessageBody::new("Recipe has been deleted")),
        Err(error) => handle_domain_error(error),
    }
}
