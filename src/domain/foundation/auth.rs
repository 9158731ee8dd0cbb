//! Authentication types for the domain layer.
//!
//! An `AuthenticatedTeacher` is the identity stored behind a session token.
//! The HTTP layer resolves it from the `Authorization` header and hands it to
//! handlers that mutate rosters.

use thiserror::Error;

/// Fixed message returned whenever a gated operation lacks a valid session.
pub const AUTHENTICATION_REQUIRED: &str =
    "Authentication required. Only teachers can perform this action.";

/// Teacher identity attached to an active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedTeacher {
    /// Teacher's email address, the credential key.
    pub email: String,

    /// Display name shown in the UI.
    pub name: String,
}

impl AuthenticatedTeacher {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

/// Authentication errors raised by the auth guard.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("{}", AUTHENTICATION_REQUIRED)]
    MissingCredentials,

    /// The header was not of the form `Bearer <token>`.
    #[error("{}", AUTHENTICATION_REQUIRED)]
    MalformedHeader,

    /// The token does not belong to an active session.
    #[error("{}", AUTHENTICATION_REQUIRED)]
    InvalidToken,

    /// The session store could not be consulted.
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AuthError {
    /// Returns true if the caller should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        !matches!(self, AuthError::StoreUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_teacher_new_sets_fields() {
        let teacher = AuthenticatedTeacher::new("mrodriguez@mergington.edu", "Ms. Rodriguez");
        assert_eq!(teacher.email, "mrodriguez@mergington.edu");
        assert_eq!(teacher.name, "Ms. Rodriguez");
    }

    #[test]
    fn credential_errors_share_the_fixed_message() {
        for err in [
            AuthError::MissingCredentials,
            AuthError::MalformedHeader,
            AuthError::InvalidToken,
        ] {
            assert_eq!(err.to_string(), AUTHENTICATION_REQUIRED);
            assert!(err.requires_reauthentication());
        }
    }

    #[test]
    fn store_unavailable_is_not_a_reauthentication_case() {
        let err = AuthError::StoreUnavailable("poisoned".to_string());
        assert!(!err.requires_reauthentication());
        assert!(err.to_string().contains("poisoned"));
    }
}
