//! In-Memory Session Store
//!
//! Sessions live in a process-wide map until logout. Nothing expires.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthenticatedTeacher, DomainError, SessionToken};
use crate::ports::SessionStore;

/// In-memory storage for teacher sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, AuthenticatedTeacher>>>,
}

impl InMemorySessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of active sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, teacher: AuthenticatedTeacher) -> Result<SessionToken, DomainError> {
        let token = SessionToken::generate();
        self.sessions.write().await.insert(token.clone(), teacher);
        Ok(token)
    }

    async fn resolve(
        &self,
        token: &SessionToken,
    ) -> Result<Option<AuthenticatedTeacher>, DomainError> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn destroy(&self, token: &SessionToken) -> Result<(), DomainError> {
        self.sessions.write().await.remove(token);
        Ok(())
    }
}
