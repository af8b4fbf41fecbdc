//! CORS policy wired per environment.
//!
//! Development stays permissive so local frontends and API tooling can
//! hit the server freely; production only admits the origins named in
//! `CORS_ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use pf_shared::Environment;

/// Build the CORS middleware for the current environment.
///
/// `CORS_MAX_AGE` overrides the preflight cache lifetime (seconds,
/// default 3600); `CORS_ALLOWED_ORIGINS` is a comma-separated origin
/// list honored in production only.
pub fn create_cors() -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(3600);

    if Environment::from_env().is_production() {
        production_policy(max_age)
    } else {
        development_policy(max_age)
    }
}

/// Any origin, no credentials. Wildcard origins cannot carry cookies,
/// so the session strategy needs a same-origin frontend in development.
fn development_policy(max_age: usize) -> Cors {
    base_policy(max_age)
        .allow_any_origin()
        .allowed_header(header::ORIGIN)
}

/// Origin allow-list with credentials, so session cookies survive
/// cross-origin requests.
fn production_policy(max_age: usize) -> Cors {
    let mut cors = base_policy(max_age).supports_credentials();

    if let Ok(origins) = env::var("CORS_ALLOWED_ORIGINS") {
        for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            log::info!("allowing CORS origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

fn base_policy(max_age: usize) -> Cors {
    Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(max_age)
}
