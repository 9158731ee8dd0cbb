//! Session store port.
//!
//! Maps opaque bearer tokens to the teacher who logged in. Sessions live
//! until logout; there is no expiry.

use async_trait::async_trait;

use crate::domain::foundation::{AuthenticatedTeacher, DomainError, SessionToken};

/// Stores active teacher sessions.
///
/// # Contract
///
/// - `create` returns a fresh, unguessable token
/// - `resolve` returns `Ok(None)` for unknown tokens
/// - `destroy` is a no-op for unknown tokens
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Opens a session for the teacher and returns its token.
    async fn create(&self, teacher: AuthenticatedTeacher) -> Result<SessionToken, DomainError>;

    /// Looks up the teacher behind a token.
    async fn resolve(&self, token: &SessionToken)
        -> Result<Option<AuthenticatedTeacher>, DomainError>;

    /// Ends a session.
    async fn destroy(&self, token: &SessionToken) -> Result<(), DomainError>;
}
