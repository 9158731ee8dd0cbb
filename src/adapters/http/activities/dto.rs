//! HTTP DTOs (Data Transfer Objects) for activity endpoints.
//!
//! These types define the JSON request/response structure for the roster API.

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::activity::Activity;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string of the roster mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    /// Student email to add or remove.
    pub email: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One activity in the registry listing.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description().to_string(),
            schedule: activity.schedule().to_string(),
            max_participants: activity.max_participants(),
            participants: activity.participants().to_vec(),
        }
    }
}

/// Registry listing: a JSON object keyed by activity name, in registry order.
#[derive(Debug, Clone)]
pub struct ActivityListResponse(pub Vec<(String, ActivityResponse)>);

impl Serialize for ActivityListResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, activity)| (name, activity)))
    }
}

impl From<Vec<Activity>> for ActivityListResponse {
    fn from(activities: Vec<Activity>) -> Self {
        Self(
            activities
                .iter()
                .map(|a| (a.name().to_string(), ActivityResponse::from(a)))
                .collect(),
        )
    }
}

/// Confirmation of a roster change.
#[derive(Debug, Clone, Serialize)]
pub struct RosterCommandResponse {
    pub message: String,
}

/// Error body. `detail` carries the human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            detail: detail.into(),
        }
    }
}
