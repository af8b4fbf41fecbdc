//! Authentication guard for the write endpoints
//!
//! One middleware covers both strategies. In bearer mode the
//! `Authorization` header must carry a token the token service accepts;
//! in session mode the cookie session must hold a token stored at
//! sign-in. Either way the resolved username lands in request extensions
//! as [`AuthContext`] for handlers that want it.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_session::SessionExt;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;

use pf_core::services::TokenService;
use pf_shared::AuthStrategy;

use crate::error::ApiError;

/// Session key under which the signed-in username is stored
pub const SESSION_USERNAME_KEY: &str = "username";

/// Session key under which the opaque session token is stored
pub const SESSION_TOKEN_KEY: &str = "token";

/// Authenticated caller identity injected into request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Username the credential resolved to
    pub username: String,
}

/// Authentication middleware factory
#[derive(Clone)]
pub struct AuthGuard {
    strategy: AuthStrategy,
    token_service: Arc<TokenService>,
}

impl AuthGuard {
    pub fn new(strategy: AuthStrategy, token_service: Arc<TokenService>) -> Self {
        Self {
            strategy,
            token_service,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGuardMiddleware {
            service: Rc::new(service),
            strategy: self.strategy,
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Authentication middleware service
pub struct AuthGuardMiddleware<S> {
    service: Rc<S>,
    strategy: AuthStrategy,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let strategy = self.strategy;
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let context = match strategy {
                AuthStrategy::Bearer => authorize_bearer(&req, &token_service)?,
                AuthStrategy::Session => authorize_session(&req)?,
            };
            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

fn authorize_bearer(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthContext, Error> {
    let token = token_from_headers(req.headers())
        .ok_or_else(|| ApiError::unauthorized("Missing authorization token"))?;
    let claims = token_service
        .verify(&token)
        .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;
    Ok(AuthContext {
        username: claims.sub,
    })
}

fn authorize_session(req: &ServiceRequest) -> Result<AuthContext, Error> {
    let session = req.get_session();
    let token: Option<String> = session.get(SESSION_TOKEN_KEY).unwrap_or(None);
    if token.is_none() {
        return Err(ApiError::forbidden("Not logged").into());
    }
    let username = session
        .get::<String>(SESSION_USERNAME_KEY)
        .unwrap_or(None)
        .unwrap_or_default();
    Ok(AuthContext { username })
}

/// Reads the Authorization header, tolerating an optional `Bearer ` prefix.
pub(crate) fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required").into());
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_token_from_headers_strips_bearer_prefix() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token_123"))
            .to_srv_request();

        assert_eq!(
            token_from_headers(req.headers()),
            Some("token_123".to_string())
        );
    }

    #[test]
    fn test_token_from_headers_accepts_raw_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "token_123"))
            .to_srv_request();

        assert_eq!(
            token_from_headers(req.headers()),
            Some("token_123".to_string())
        );
    }

    #[test]
    fn test_token_from_headers_missing_or_empty() {
        let absent = TestRequest::default().to_srv_request();
        assert_eq!(token_from_headers(absent.headers()), None);

        let empty = TestRequest::default()
            .insert_header((AUTHORIZATION, ""))
            .to_srv_request();
        assert_eq!(token_from_headers(empty.headers()), None);
    }
}
