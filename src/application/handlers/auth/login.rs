//! LoginHandler - Command handler for teacher sign-in.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{AuthError, AuthenticatedTeacher, SessionToken};
use crate::domain::teacher::TeacherDirectory;
use crate::ports::SessionStore;

/// Command to sign a teacher in.
pub struct LoginCommand {
    pub email: String,
    pub password: SecretString,
}

/// Outcome of a login attempt.
///
/// A rejected login is not an error: unknown email and wrong password are
/// reported identically.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated {
        token: SessionToken,
        teacher: AuthenticatedTeacher,
    },
    Rejected,
}

impl LoginOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Authenticated { .. } => "Login successful",
            LoginOutcome::Rejected => "Invalid email or password",
        }
    }
}

/// Handler for teacher sign-in.
pub struct LoginHandler {
    directory: Arc<TeacherDirectory>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(directory: Arc<TeacherDirectory>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            directory,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginOutcome, AuthError> {
        let Some(teacher) = self
            .directory
            .authenticate(&cmd.email, cmd.password.expose_secret())
        else {
            tracing::warn!(email = %cmd.email, "Rejected teacher login");
            return Ok(LoginOutcome::Rejected);
        };

        let identity = teacher.identity();
        let token = self
            .sessions
            .create(identity.clone())
            .await
            .map_err(|e| AuthError::StoreUnavailable(e.to_string()))?;

        tracing::info!(email = %identity.email, "Teacher logged in");
        Ok(LoginOutcome::Authenticated {
            token,
            teacher: identity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::teacher::Teacher;

    fn handler() -> (LoginHandler, Arc<InMemorySessionStore>) {
        let directory = Arc::new(TeacherDirectory::from_teachers([Teacher::new(
            "mchen@mergington.edu",
            "Mr. Chen",
            "chess456",
        )]));
        let sessions = Arc::new(InMemorySessionStore::new());
        (LoginHandler::new(directory, sessions.clone()), sessions)
    }

    fn command(email: &str, password: &str) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            password: SecretString::new(password.to_string()),
        }
    }

    #[tokio::test]
    async fn correct_credentials_open_a_session() {
        let (handler, sessions) = handler();

        let outcome = handler
            .handle(command("mchen@mergington.edu", "chess456"))
            .await
            .unwrap();

        let LoginOutcome::Authenticated { token, teacher } = outcome else {
            panic!("expected successful login");
        };
        assert_eq!(teacher.name, "Mr. Chen");
        assert_eq!(sessions.resolve(&token).await.unwrap(), Some(teacher));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let (handler, sessions) = handler();

        let wrong_password = handler
            .handle(command("mchen@mergington.edu", "nope"))
            .await
            .unwrap();
        let unknown_email = handler
            .handle(command("ghost@mergington.edu", "chess456"))
            .await
            .unwrap();

        assert!(!wrong_password.is_authenticated());
        assert!(!unknown_email.is_authenticated());
        assert_eq!(wrong_password.message(), unknown_email.message());
        assert_eq!(wrong_password.message(), "Invalid email or password");
        assert_eq!(sessions.session_count().await, 0);
    }
}
