//! HTTP handlers for activity endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::activity::{
    ListActivitiesHandler, SignUpCommand, SignUpHandler, UnregisterCommand, UnregisterHandler,
};
use crate::domain::activity::ActivityError;
use crate::ports::ActivityRepository;

use super::dto::{ActivityListResponse, EmailQuery, ErrorResponse, RosterCommandResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ActivityHandlers {
    list_handler: Arc<ListActivitiesHandler>,
    sign_up_handler: Arc<SignUpHandler>,
    unregister_handler: Arc<UnregisterHandler>,
}

impl ActivityHandlers {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self {
            list_handler: Arc::new(ListActivitiesHandler::new(repository.clone())),
            sign_up_handler: Arc::new(SignUpHandler::new(repository.clone())),
            unregister_handler: Arc::new(UnregisterHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /activities - List every activity with its roster
pub async fn list_activities(State(handlers): State<ActivityHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(activities) => {
            let response = ActivityListResponse::from(activities);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_activity_error(e),
    }
}

/// POST /activities/:activity_name/signup - Sign a student up
pub async fn sign_up(
    State(handlers): State<ActivityHandlers>,
    RequireAuth(teacher): RequireAuth,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    let cmd = SignUpCommand {
        activity_name,
        email: query.email,
        requested_by: teacher,
    };

    match handlers.sign_up_handler.handle(cmd).await {
        Ok(result) => {
            let response = RosterCommandResponse {
                message: result.message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_activity_error(e),
    }
}

/// DELETE /activities/:activity_name/unregister - Remove a student
pub async fn unregister(
    State(handlers): State<ActivityHandlers>,
    RequireAuth(teacher): RequireAuth,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    let cmd = UnregisterCommand {
        activity_name,
        email: query.email,
        requested_by: teacher,
    };

    match handlers.unregister_handler.handle(cmd).await {
        Ok(result) => {
            let response = RosterCommandResponse {
                message: result.message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_activity_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_activity_error(error: ActivityError) -> Response {
    let detail = error.message();
    match error {
        ActivityError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(detail)),
        )
            .into_response(),
        ActivityError::AlreadySignedUp { .. } | ActivityError::NotSignedUp { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(detail)),
        )
            .into_response(),
        ActivityError::Infrastructure(msg) => {
            tracing::error!("Activity registry failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
