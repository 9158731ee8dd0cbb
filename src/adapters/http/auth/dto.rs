//! HTTP DTOs for authentication endpoints.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::application::LoginOutcome;
use crate::domain::foundation::AuthenticatedTeacher;

/// Login credentials.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

/// Login result.
///
/// Failed logins are reported in-band with `success: false` and a 200 status.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
    pub teacher_name: Option<String>,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        let message = outcome.message().to_string();
        match outcome {
            LoginOutcome::Authenticated { token, teacher } => Self {
                success: true,
                message,
                token: Some(token.to_string()),
                teacher_name: Some(teacher.name),
            },
            LoginOutcome::Rejected => Self {
                success: false,
                message,
                token: None,
                teacher_name: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

impl Default for LogoutResponse {
    fn default() -> Self {
        Self {
            message: "Logged out successfully".to_string(),
        }
    }
}

/// Session status. Identity fields are omitted when not authenticated.
#[derive(Debug, Clone, Serialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<Option<AuthenticatedTeacher>> for AuthStatusResponse {
    fn from(teacher: Option<AuthenticatedTeacher>) -> Self {
        match teacher {
            Some(teacher) => Self {
                authenticated: true,
                teacher_name: Some(teacher.name),
                email: Some(teacher.email),
            },
            None => Self {
                authenticated: false,
                teacher_name: None,
                email: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionToken;
    use secrecy::ExposeSecret;
    use serde_json::json;

    #[test]
    fn login_request_deserializes() {
        let req: LoginRequest =
            serde_json::from_value(json!({"email": "a@m.edu", "password": "pw"})).unwrap();
        assert_eq!(req.email, "a@m.edu");
        assert_eq!(req.password.expose_secret(), "pw");
    }

    #[test]
    fn rejected_login_serializes_nulls() {
        let value = serde_json::to_value(LoginResponse::from(LoginOutcome::Rejected)).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "Invalid email or password",
                "token": null,
                "teacher_name": null
            })
        );
    }

    #[test]
    fn successful_login_carries_token_and_name() {
        let token = SessionToken::parse("tok").unwrap();
        let outcome = LoginOutcome::Authenticated {
            token,
            teacher: AuthenticatedTeacher::new("a@m.edu", "Ms. A"),
        };

        let response = LoginResponse::from(outcome);

        assert!(response.success);
        assert_eq!(response.message, "Login successful");
        assert_eq!(response.token.as_deref(), Some("tok"));
        assert_eq!(response.teacher_name.as_deref(), Some("Ms. A"));
    }

    #[test]
    fn anonymous_status_has_only_the_flag() {
        let value = serde_json::to_value(AuthStatusResponse::from(None)).unwrap();
        assert_eq!(value, json!({"authenticated": false}));
    }
}
