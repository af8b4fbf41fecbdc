//! Plateful API server binary
//!
//! Loads configuration, connects MySQL and Redis, wires the domain
//! services together and serves the application assembled by
//! [`pf_api::app::create_app`].

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use pf_api::app::{create_app, AppState};
use pf_core::services::{AuthService, RecipeService, TokenService, TokenServiceConfig};
use pf_infra::cache::{RedisClient, RedisRecipeCache};
use pf_infra::database::{DatabasePool, MySqlRecipeRepository, MySqlUserRepository};
use pf_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!("Starting Plateful API server ({})", config.environment);

    if config.is_production() && config.auth.jwt.is_using_default_secret() {
        anyhow::bail!("JWT_SECRET must be set in production");
    }

    // External connections
    let pool = DatabasePool::new(config.database.clone()).await?;
    let redis = RedisClient::new(config.cache.clone()).await?;

    // Repositories and cache behind the core traits
    let recipe_repository = Arc::new(MySqlRecipeRepository::new(pool.get_pool().clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let recipe_cache = Arc::new(RedisRecipeCache::new(redis));

    // Domain services
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
    ));
    let recipe_service = Arc::new(RecipeService::new(recipe_repository, recipe_cache));

    let state = web::Data::new(AppState::new(
        recipe_service,
        auth_service,
        token_service,
        config.auth.clone(),
    ));

    let bind_address = config.server.bind_address();
    info!(
        "Server will bind to: {} (auth strategy: {})",
        bind_address, config.auth.strategy
    );

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    Ok(())
}
