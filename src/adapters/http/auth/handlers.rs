//! HTTP handlers for authentication endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::activities::ErrorResponse;
use crate::adapters::http::middleware::{BearerToken, OptionalAuth};
use crate::application::handlers::auth::{LoginCommand, LoginHandler, LogoutHandler};
use crate::domain::foundation::AuthError;
use crate::domain::teacher::TeacherDirectory;
use crate::ports::SessionStore;

use super::dto::{AuthStatusResponse, LoginRequest, LoginResponse, LogoutResponse};

#[derive(Clone)]
pub struct AuthHandlers {
    login_handler: Arc<LoginHandler>,
    logout_handler: Arc<LogoutHandler>,
}

impl AuthHandlers {
    pub fn new(directory: Arc<TeacherDirectory>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            login_handler: Arc::new(LoginHandler::new(directory, sessions.clone())),
            logout_handler: Arc::new(LogoutHandler::new(sessions)),
        }
    }
}

/// POST /auth/login - Sign a teacher in
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(outcome) => (StatusCode::OK, Json(LoginResponse::from(outcome))).into_response(),
        Err(e) => handle_auth_error(e),
    }
}

/// POST /auth/logout - End the presented session
pub async fn logout(
    State(handlers): State<AuthHandlers>,
    BearerToken(token): BearerToken,
) -> Response {
    match handlers.logout_handler.handle(token).await {
        Ok(()) => (StatusCode::OK, Json(LogoutResponse::default())).into_response(),
        Err(e) => handle_auth_error(e),
    }
}

/// GET /auth/status - Report the presented session's teacher
pub async fn auth_status(OptionalAuth(teacher): OptionalAuth) -> Json<AuthStatusResponse> {
    Json(AuthStatusResponse::from(teacher))
}

fn handle_auth_error(error: AuthError) -> Response {
    tracing::error!("Authentication failure: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("Internal server error")),
    )
        .into_response()
}
