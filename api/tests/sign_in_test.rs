//! Integration tests for the sign-in endpoint

use std::sync::Arc;

use actix_web::{http::header, test, web};
use chrono::{DateTime, Utc};

use pf_api::app::{create_app, AppState};
use pf_core::domain::entities::user::User;
use pf_core::repositories::{MockRecipeRepository, MockUserRepository};
use pf_core::services::{
    AuthService, MockRecipeListCache, RecipeService, TokenService, TokenServiceConfig,
};
use pf_shared::{AuthConfig, AuthStrategy};

/// Low bcrypt cost keeps the test accounts cheap to hash
const TEST_BCRYPT_COST: u32 = 4;

type TestState = web::Data<AppState<MockRecipeRepository, MockUserRepository, MockRecipeListCache>>;

async fn state_with(strategy: AuthStrategy) -> TestState {
    let hash = bcrypt::hash("passadmin", TEST_BCRYPT_COST).unwrap();
    let user_repository =
        Arc::new(MockUserRepository::with_users(vec![User::new("admin", hash)]).await);
    let recipe_repository = Arc::new(MockRecipeRepository::new());
    let cache = Arc::new(MockRecipeListCache::new());

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::default()));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&token_service),
    ));
    let recipe_service = Arc::new(RecipeService::new(recipe_repository, cache));

    web::Data::new(AppState::new(
        recipe_service,
        auth_service,
        token_service,
        AuthConfig {
            strategy,
            ..AuthConfig::default()
        },
    ))
}

#[actix_web::test]
async fn test_sign_in_returns_token_with_future_expiry() {
    let state = state_with(AuthStrategy::Bearer).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/signin")
        .set_json(serde_json::json!({"username": "admin", "password": "passadmin"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    let expires: DateTime<Utc> = body["expires"].as_str().unwrap().parse().unwrap();

    assert!(expires > Utc::now());

    let claims = state.token_service.verify(token).unwrap();
    assert_eq!(claims.sub, "admin");
}

#[actix_web::test]
async fn test_sign_in_wrong_password() {
    let state = state_with(AuthStrategy::Bearer).await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/signin")
        .set_json(serde_json::json!({"username": "admin", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid Username or Password");
}

#[actix_web::test]
async fn test_sign_in_unknown_user() {
    let state = state_with(AuthStrategy::Bearer).await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/signin")
        .set_json(serde_json::json!({"username": "ghost", "password": "passadmin"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Same response as a wrong password, so usernames cannot be probed
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid Username or Password");
}

#[actix_web::test]
async fn test_sign_in_malformed_body() {
    let state = state_with(AuthStrategy::Bearer).await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/signin")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_sign_in_session_sets_cookie() {
    let state = state_with(AuthStrategy::Session).await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/signin")
        .set_json(serde_json::json!({"username": "admin", "password": "passadmin"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert!(resp
        .response()
        .cookies()
        .any(|cookie| cookie.name() == "session"));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User signed in");
}

#[actix_web::test]
async fn test_sign_in_session_rejects_bad_credentials_without_cookie() {
    let state = state_with(AuthStrategy::Session).await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/signin")
        .set_json(serde_json::json!({"username": "admin", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    assert!(!resp
        .response()
        .cookies()
        .any(|cookie| cookie.name() == "session"));
}
