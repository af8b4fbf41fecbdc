use actix_session::Session;
use actix_web::{web, HttpResponse};

use pf_core::repositories::{RecipeRepository, UserRepository};
use pf_core::services::RecipeListCache;
use pf_shared::{AuthStrategy, ErrorBody, MessageBody};

use crate::app::AppState;
use crate::dto::{SignInRequest, TokenResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::{SESSION_TOKEN_KEY, SESSION_USERNAME_KEY};

/// Handler for `POST /signin`
///
/// Verifies the submitted credentials and, depending on the active
/// strategy, either returns a bearer token or stores a fresh opaque token
/// in the cookie session.
///
/// # Request
///
/// ```json
/// { "username": "admin", "password": "passadmin" }
/// ```
///
/// # Response
///
/// ## Bearer strategy (200 OK)
/// ```json
/// { "token": "<jwt>", "expires": "2024-01-01T10:10:00Z" }
/// ```
///
/// ## Session strategy (200 OK)
/// ```json
/// { "message": "User signed in" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed JSON body
/// - 401 Unauthorized: unknown username or wrong password
pub async fn sign_in<R, U, C>(
    state: web::Data<AppState<R, U, C>>,
    session: Session,
    request: web::Json<SignInRequest>,
) -> HttpResponse
where
    R: RecipeRepository + 'static,
    U: UserRepository + 'static,
    C: RecipeListCache + 'static,
{
    let request = request.into_inner();

    match state.strategy() {
        AuthStrategy::Bearer => {
            match state
                .auth_service
                .sign_in(&request.username, &request.password)
                .await
            {
                Ok(issued) => HttpResponse::Ok().json(TokenResponse::from(issued)),
                Err(error) => handle_domain_error(error),
            }
        }
        AuthStrategy::Session => {
            match state
                .auth_service
                .sign_in_session(&request.username, &request.password)
                .await
            {
                Ok(token) => open_session(&session, &request.username, &token),
                Err(error) => handle_domain_error(error),
            }
        }
    }
}

fn open_session(session: &Session, username: &str, token: &str) -> HttpResponse {
    let stored = session
        .insert(SESSION_USERNAME_KEY, username)
        .and_then(|_| session.insert(SESSION_TOKEN_KEY, token));

    match stored {
        Ok(()) => HttpResponse::Ok().json(MessageBody::new("User signed in")),
        Err(error) => {
            log::error!("failed to persist session: {}", error);
            HttpResponse::InternalServerError().json(ErrorBody::new("Could not establish session"))
        }
    }
}
