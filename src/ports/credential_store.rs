//! Credential store port.
//!
//! Supplies teacher accounts once, at startup.

use async_trait::async_trait;

use crate::domain::teacher::TeacherDirectory;

/// Errors that can occur while loading teacher credentials.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Failed to read credentials from {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Malformed credentials in {path}: {message}")]
    Malformed { path: String, message: String },
}

/// Source of teacher accounts.
///
/// A missing source is not an error: implementations return an empty
/// directory so the service still starts, with every login failing.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> Result<TeacherDirectory, CredentialError>;
}
