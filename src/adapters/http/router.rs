//! Top-level router assembly.
//!
//! Merges the per-module routers, mounts static assets and wraps everything
//! in the session middleware. Server-wide layers (trace, timeout, CORS) are
//! applied separately so tests can drive the bare application router.

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::domain::teacher::TeacherDirectory;
use crate::ports::{ActivityRepository, SessionStore};

use super::activities::{activity_routes, ActivityHandlers};
use super::auth::{auth_routes, AuthHandlers};
use super::middleware::auth_middleware;

/// Shared stores handed to every HTTP module.
#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<dyn ActivityRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub teachers: Arc<TeacherDirectory>,
}

impl AppState {
    pub fn new(
        activities: Arc<dyn ActivityRepository>,
        sessions: Arc<dyn SessionStore>,
        teachers: Arc<TeacherDirectory>,
    ) -> Self {
        Self {
            activities,
            sessions,
            teachers,
        }
    }
}

/// Builds the application router.
///
/// `GET /` redirects to the front-end entry page under `/static`.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let activity_handlers = ActivityHandlers::new(state.activities.clone());
    let auth_handlers = AuthHandlers::new(state.teachers.clone(), state.sessions.clone());

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .merge(activity_routes(activity_handlers))
        .merge(auth_routes(auth_handlers))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(from_fn_with_state(state.sessions, auth_middleware))
}

/// Wraps a router in the request timeout, tracing and CORS layers.
///
/// CORS is only enabled when origins are configured.
pub fn apply_server_layers(router: Router, config: &ServerConfig) -> Router {
    let router = router
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return router;
    }

    router.layer(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
