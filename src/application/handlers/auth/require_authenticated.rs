//! Auth guard - resolves the teacher behind an `Authorization` header.

use crate::domain::foundation::{AuthError, AuthenticatedTeacher, SessionToken};
use crate::ports::SessionStore;

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the session token from a `Bearer <token>` header value.
///
/// The token ends at the first space after the prefix. Returns `None` when
/// the prefix is missing or the token is empty.
pub fn parse_bearer(header: &str) -> Option<SessionToken> {
    let rest = header.strip_prefix(BEARER_PREFIX)?;
    SessionToken::parse(rest.split(' ').next().unwrap_or_default())
}

/// Returns the teacher owning the presented session.
///
/// # Errors
///
/// - `MissingCredentials` when no header was sent
/// - `MalformedHeader` when the header is not `Bearer <token>`
/// - `InvalidToken` when no session matches the token
/// - `StoreUnavailable` when the session store fails
pub async fn require_authenticated(
    authorization: Option<&str>,
    sessions: &dyn SessionStore,
) -> Result<AuthenticatedTeacher, AuthError> {
    let header = authorization.ok_or(AuthError::MissingCredentials)?;
    let token = parse_bearer(header).ok_or(AuthError::MalformedHeader)?;

    sessions
        .resolve(&token)
        .await
        .map_err(|e| AuthError::StoreUnavailable(e.to_string()))?
        .ok_or(AuthError::InvalidToken)
}
