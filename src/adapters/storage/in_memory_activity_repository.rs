//! In-Memory Activity Repository
//!
//! Keeps the activity registry in process memory, in catalog order.
//! Everything resets when the process restarts.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::activity::{mergington_catalog, Activity};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ActivityRepository;

/// In-memory activity registry
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    activities: Arc<RwLock<Vec<Activity>>>,
}

impl InMemoryActivityRepository {
    /// Create a registry holding the given activities
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Create a registry seeded with the Mergington catalog
    pub fn seeded() -> Self {
        Self::with_activities(mergington_catalog())
    }

    /// Get the number of activities
    pub async fn activity_count(&self) -> usize {
        self.activities.read().await.len()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find_all(&self) -> Result<Vec<Activity>, DomainError> {
        Ok(self.activities.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DomainError> {
        let activities = self.activities.read().await;
        Ok(activities.iter().find(|a| a.name() == name).cloned())
    }

    async fn update(&self, activity: &Activity) -> Result<(), DomainError> {
        let mut activities = self.activities.write().await;
        match activities.iter_mut().find(|a| a.name() == activity.name()) {
            Some(existing) => {
                *existing = activity.clone();
                Ok(())
            }
            None => Err(
                DomainError::new(ErrorCode::ActivityNotFound, "Activity not found")
                    .with_detail("activity", activity.name()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_registry_lists_catalog_in_order() {
        let repository = InMemoryActivityRepository::seeded();

        let activities = repository.find_all().await.unwrap();

        assert_eq!(repository.activity_count().await, 9);
        assert_eq!(activities[0].name(), "Chess Club");
        assert_eq!(activities[8].name(), "Debate Team");
    }

    #[tokio::test]
    async fn find_by_name_is_exact() {
        let repository = InMemoryActivityRepository::seeded();

        assert!(repository.find_by_name("Chess Club").await.unwrap().is_some());
        assert!(repository.find_by_name("chess club").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_stored_activity() {
        let repository = InMemoryActivityRepository::seeded();
        let mut chess = repository.find_by_name("Chess Club").await.unwrap().unwrap();
        chess.sign_up("new@mergington.edu").unwrap();

        repository.update(&chess).await.unwrap();

        let stored = repository.find_by_name("Chess Club").await.unwrap().unwrap();
        assert_eq!(stored.participants().len(), 3);
        assert_eq!(stored.participants()[2], "new@mergington.edu");
    }

    #[tokio::test]
    async fn update_unknown_activity_fails() {
        let repository = InMemoryActivityRepository::with_activities(vec![]);
        let activity = Activity::new("Robotics", "d", "s", 4);

        let err = repository.update(&activity).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ActivityNotFound);
        assert_eq!(err.details.get("activity"), Some(&"Robotics".to_string()));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repository = InMemoryActivityRepository::seeded();
        let handle = repository.clone();
        let mut art = handle.find_by_name("Art Club").await.unwrap().unwrap();
        art.unregister("amelia@mergington.edu").unwrap();
        handle.update(&art).await.unwrap();

        let seen = repository.find_by_name("Art Club").await.unwrap().unwrap();
        assert_eq!(seen.participants(), &["harper@mergington.edu".to_string()]);
    }
}
