use actix_web::{web, HttpRequest, HttpResponse};

use pf_core::repositories::{RecipeRepository, UserRepository};
use pf_core::services::RecipeListCache;
use pf_shared::ErrorBody;

use crate::app::AppState;
use crate::dto::TokenResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::token_from_headers;

/// Handler for `POST /refresh`
///
/// Exchanges a bearer token that is about to expire for a fresh one. The
/// current token travels in the `Authorization` header exactly as issued.
/// Tokens with more than the refresh window remaining are refused, so a
/// client cannot keep a session alive indefinitely by refreshing early.
///
/// # Response (200 OK)
/// ```json
/// { "token": "<jwt>", "expires": "2024-01-01T10:05:00Z" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: token is not within the refresh window yet
/// - 401 Unauthorized: missing, invalid, or already expired token
pub async fn refresh<R, U, C>(
    req: HttpRequest,
    state: web::Data<AppState<R, U, C>>,
) -> HttpResponse
where
    R: RecipeRepository + 'static,
    U: UserRepository + 'static,
    C: RecipeListCache + 'static,
{
    let token = match token_from_headers(req.headers()) {
        Some(token) => token,
        None => {
            return HttpResponse::Unauthorized()
                .json(ErrorBody::new("Missing authorization token"))
        }
    };

    match state.auth_service.refresh(&token) {
        Ok(issued) => HttpResponse::Ok().json(TokenResponse::from(issued)),
        Err(error) => handle_domain_error(error),
    }
}
