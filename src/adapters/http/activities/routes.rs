//! HTTP routes for activity endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{list_activities, sign_up, unregister, ActivityHandlers};

/// Creates the activity router with all endpoints.
pub fn activity_routes(handlers: ActivityHandlers) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(sign_up))
        .route("/activities/:activity_name/unregister", delete(unregister))
        .with_state(handlers)
}
