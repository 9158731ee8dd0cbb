//! Activity repository port.
//!
//! Holds the activity registry. Mutations follow load, change, `update`;
//! the repository does not serialize concurrent read-modify-write cycles,
//! so the last `update` of an activity wins.

use async_trait::async_trait;

use crate::domain::activity::Activity;
use crate::domain::foundation::DomainError;

/// Repository port for the activity registry.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Returns every activity.
    async fn find_all(&self) -> Result<Vec<Activity>, DomainError>;

    /// Finds an activity by its exact name.
    ///
    /// Returns `None` if not found.
    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DomainError>;

    /// Stores a modified activity.
    ///
    /// # Errors
    ///
    /// - `ActivityNotFound` if no activity with that name exists
    /// - `StorageError` on storage failure
    async fn update(&self, activity: &Activity) -> Result<(), DomainError>;
}
