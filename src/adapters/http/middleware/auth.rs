//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that resolves Bearer tokens and injects the teacher into extensions
//! - `RequireAuth` - Extractor that requires a signed-in teacher
//! - `OptionalAuth` - Extractor for optional authentication
//! - `BearerToken` - Extractor for the raw token, resolved or not
//!
//! # Architecture
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedTeacher into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! Unlike a hard gate, the middleware lets requests with a bad or unknown
//! token through without an identity. Public endpoints such as
//! `/auth/status` answer them; gated endpoints reject them through
//! `RequireAuth`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{parse_bearer, require_authenticated};
use crate::domain::foundation::{
    AuthError, AuthenticatedTeacher, SessionToken, AUTHENTICATION_REQUIRED,
};
use crate::ports::SessionStore;

/// Auth middleware state - wraps the session store.
pub type AuthState = Arc<dyn SessionStore>;

/// Session middleware.
///
/// 1. Reads the `Authorization` header
/// 2. Resolves the bearer token through the auth guard
/// 3. On success, injects `AuthenticatedTeacher` into request extensions
/// 4. On a missing, malformed or unknown token, continues without an identity
/// 5. When the session store fails, returns 503
pub async fn auth_middleware(
    State(sessions): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    match require_authenticated(authorization.as_deref(), sessions.as_ref()).await {
        Ok(teacher) => {
            request.extensions_mut().insert(teacher);
        }
        Err(AuthError::StoreUnavailable(msg)) => {
            tracing::error!("Session store unavailable: {}", msg);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "code": "AUTH_UNAVAILABLE",
                    "detail": "Authentication service unavailable"
                })),
            )
                .into_response();
        }
        Err(AuthError::MissingCredentials) => {}
        Err(e) => {
            tracing::debug!(reason = ?e, "Ignoring unusable bearer credentials");
        }
    }

    next.run(request).await
}

/// Extractor that requires a signed-in teacher.
///
/// Rejects with 401 and the fixed authentication message when the
/// middleware did not attach an identity.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedTeacher);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedTeacher>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Extractor for optional authentication.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedTeacher>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(
            parts.extensions.get::<AuthenticatedTeacher>().cloned(),
        ))
    }
}

/// Extractor for the presented bearer token, whether or not it has a session.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<SessionToken>);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(parse_bearer);
        Ok(BearerToken(token))
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid session token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "code": "UNAUTHENTICATED",
                    "detail": AUTHENTICATION_REQUIRED
                })),
            )
                .into_response(),
        }
    }
}
