//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers, authentication types and error types
//! that form the vocabulary of the roster domain.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedTeacher, AUTHENTICATION_REQUIRED};
pub use errors::{DomainError, ErrorCode};
pub use ids::SessionToken;
