//! Activity-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Activity-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    /// No activity with this name exists.
    NotFound(String),
    /// The student is already on the roster.
    AlreadySignedUp { activity: String, email: String },
    /// The student is not on the roster.
    NotSignedUp { activity: String, email: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ActivityError {
    pub fn not_found(name: impl Into<String>) -> Self {
        ActivityError::NotFound(name.into())
    }
    pub fn already_signed_up(activity: impl Into<String>, email: impl Into<String>) -> Self {
        ActivityError::AlreadySignedUp {
            activity: activity.into(),
            email: email.into(),
        }
    }
    pub fn not_signed_up(activity: impl Into<String>, email: impl Into<String>) -> Self {
        ActivityError::NotSignedUp {
            activity: activity.into(),
            email: email.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ActivityError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ActivityError::NotFound(_) => ErrorCode::ActivityNotFound,
            ActivityError::AlreadySignedUp { .. } => ErrorCode::AlreadySignedUp,
            ActivityError::NotSignedUp { .. } => ErrorCode::NotSignedUp,
            ActivityError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    /// Message shown to API clients.
    pub fn message(&self) -> String {
        match self {
            ActivityError::NotFound(_) => "Activity not found".to_string(),
            ActivityError::AlreadySignedUp { .. } => "Student is already signed up".to_string(),
            ActivityError::NotSignedUp { .. } => {
                "Student is not signed up for this activity".to_string()
            }
            ActivityError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ActivityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ActivityError {}

impl From<DomainError> for ActivityError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ActivityNotFound => ActivityError::NotFound(
                err.details.get("activity").cloned().unwrap_or_default(),
            ),
            _ => ActivityError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_api_contract() {
        assert_eq!(ActivityError::not_found("Chess").message(), "Activity not found");
        assert_eq!(
            ActivityError::already_signed_up("Chess", "a@b").message(),
            "Student is already signed up"
        );
        assert_eq!(
            ActivityError::not_signed_up("Chess", "a@b").message(),
            "Student is not signed up for this activity"
        );
    }

    #[test]
    fn codes_follow_variant() {
        assert_eq!(ActivityError::not_found("x").code(), ErrorCode::ActivityNotFound);
        assert_eq!(
            ActivityError::infrastructure("boom").code(),
            ErrorCode::StorageError
        );
    }

    #[test]
    fn domain_error_not_found_converts_with_activity_detail() {
        let err = DomainError::new(ErrorCode::ActivityNotFound, "missing")
            .with_detail("activity", "Robotics");
        assert_eq!(
            ActivityError::from(err),
            ActivityError::NotFound("Robotics".to_string())
        );
    }

    #[test]
    fn other_domain_errors_become_infrastructure() {
        let err = DomainError::storage("disk full");
        assert!(matches!(
            ActivityError::from(err),
            ActivityError::Infrastructure(_)
        ));
    }
}
