//! HTTP routes for authentication endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth_status, login, logout, AuthHandlers};

/// Creates the auth router with all endpoints.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/status", get(auth_status))
        .with_state(handlers)
}
