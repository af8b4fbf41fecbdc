//! Application state and factory
//!
//! `create_app` assembles the full middleware stack and route table, so
//! the server binary and the integration tests run the exact same
//! application.

use std::sync::Arc;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{error::JsonPayloadError, middleware::Logger, web, App, HttpRequest, HttpResponse};
use sha2::{Digest, Sha512};

use pf_core::repositories::{RecipeRepository, UserRepository};
use pf_core::services::{AuthService, RecipeListCache, RecipeService, TokenService};
use pf_shared::{AuthConfig, AuthStrategy, ErrorBody, SessionConfig};

use crate::middleware::{auth::AuthGuard, cors::create_cors, security::SecurityHeaders};
use crate::routes::auth::{refresh, sign_in, sign_out};
use crate::routes::recipes::{
    create_recipe, delete_recipe, list_recipes, search_recipes, update_recipe,
};

/// Shared application state handed to every handler
pub struct AppState<R, U, C>
where
    R: RecipeRepository,
    U: UserRepository,
    C: RecipeListCache,
{
    pub recipe_service: Arc<RecipeService<R, C>>,
    pub auth_service: Arc<AuthService<U>>,
    pub token_service: Arc<TokenService>,
    pub auth_config: AuthConfig,
}

impl<R, U, C> AppState<R, U, C>
where
    R: RecipeRepository,
    U: UserRepository,
    C: RecipeListCache,
{
    pub fn new(
        recipe_service: Arc<RecipeService<R, C>>,
        auth_service: Arc<AuthService<U>>,
        token_service: Arc<TokenService>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            recipe_service,
            auth_service,
            token_service,
            auth_config,
        }
    }

    /// Active authentication strategy for the write endpoints
    pub fn strategy(&self) -> AuthStrategy {
        self.auth_config.strategy
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<R, U, C>(
    app_state: web::Data<AppState<R, U, C>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: RecipeRepository + 'static,
    U: UserRepository + 'static,
    C: RecipeListCache + 'static,
{
    let guard = AuthGuard::new(app_state.strategy(), Arc::clone(&app_state.token_service));
    let session = build_session_middleware(&app_state.auth_config.session);
    let cors = create_cors();
    let security = SecurityHeaders::new();

    App::new()
        // Application state and JSON body handling
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Middleware; registration order is inside-out, so the session
        // layer sees requests first and the access log runs last
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        .wrap(session)
        // Liveness endpoints
        .route("/", web::get().to(index))
        .route("/healthz", web::get().to(index))
        // Authentication
        .route("/signin", web::post().to(sign_in::<R, U, C>))
        .route("/refresh", web::post().to(refresh::<R, U, C>))
        .route("/signout", web::post().to(sign_out))
        // Recipes; /search is registered before /{id} so it wins the match
        .service(
            web::scope("/recipes")
                .route("/search", web::get().to(search_recipes::<R, U, C>))
                .route("", web::get().to(list_recipes::<R, U, C>))
                .route(
                    "",
                    web::post().to(create_recipe::<R, U, C>).wrap(guard.clone()),
                )
                .route(
                    "/{id}",
                    web::put().to(update_recipe::<R, U, C>).wrap(guard.clone()),
                )
                .route(
                    "/{id}",
                    web::delete().to(delete_recipe::<R, U, C>).wrap(guard),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Builds the cookie session layer from configuration.
///
/// The signing key is the SHA-512 digest of the configured secret, which
/// always yields the 64 bytes `Key::from` requires regardless of the
/// secret's length.
fn build_session_middleware(config: &SessionConfig) -> SessionMiddleware<CookieSessionStore> {
    let digest = Sha512::digest(config.secret.as_bytes());
    let key = Key::from(digest.as_slice());

    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(config.cookie_name.clone())
        .cookie_secure(config.secure)
        .cookie_http_only(config.http_only)
        .cookie_content_security(CookieContentSecurity::Private)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(actix_web::cookie::time::Duration::hours(config.ttl_hours)),
        )
        .build()
}

/// Renders malformed JSON bodies as the standard `{"error": ...}` payload
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorBody::new(err.to_string());
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}

/// Liveness handler shared by `/` and `/healthz`
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "ping": "ping" }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("Resource not found"))
}
