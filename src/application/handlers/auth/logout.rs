//! LogoutHandler - Command handler for ending a teacher session.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, SessionToken};
use crate::ports::SessionStore;

/// Handler for teacher sign-out.
///
/// Logging out without a token, or with a token that has no session,
/// succeeds without doing anything.
pub struct LogoutHandler {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, token: Option<SessionToken>) -> Result<(), AuthError> {
        let Some(token) = token else {
            return Ok(());
        };

        self.sessions
            .destroy(&token)
            .await
            .map_err(|e| AuthError::StoreUnavailable(e.to_string()))?;

        tracing::info!("Teacher logged out");
        Ok(())
    }
}
