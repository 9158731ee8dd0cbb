//! UnregisterHandler - Command handler for removing a student from a roster.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityError};
use crate::domain::foundation::AuthenticatedTeacher;
use crate::ports::ActivityRepository;

/// Command to remove a student from an activity.
#[derive(Debug, Clone)]
pub struct UnregisterCommand {
    pub activity_name: String,
    pub email: String,
    pub requested_by: AuthenticatedTeacher,
}

/// Result of a successful removal.
#[derive(Debug, Clone)]
pub struct UnregisterResult {
    pub activity: Activity,
    pub message: String,
}

/// Handler for unregistering students.
pub struct UnregisterHandler {
    repository: Arc<dyn ActivityRepository>,
}

impl UnregisterHandler {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UnregisterCommand) -> Result<UnregisterResult, ActivityError> {
        let mut activity = self
            .repository
            .find_by_name(&cmd.activity_name)
            .await?
            .ok_or_else(|| ActivityError::not_found(&cmd.activity_name))?;

        activity.unregister(&cmd.email)?;

        self.repository.update(&activity).await?;

        tracing::info!(
            activity = %cmd.activity_name,
            student = %cmd.email,
            teacher = %cmd.requested_by.email,
            "Student unregistered"
        );

        Ok(UnregisterResult {
            message: format!("Unregistered {} from {}", cmd.email, cmd.activity_name),
            activity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryActivityRepository;

    fn command(activity: &str, email: &str) -> UnregisterCommand {
        UnregisterCommand {
            activity_name: activity.to_string(),
            email: email.to_string(),
            requested_by: AuthenticatedTeacher::new("mchen@mergington.edu", "Mr. Chen"),
        }
    }

    #[tokio::test]
    async fn removes_student_and_persists() {
        let repository = Arc::new(InMemoryActivityRepository::seeded());
        let handler = UnregisterHandler::new(repository.clone());

        let result = handler
            .handle(command("Drama Club", "ella@mergington.edu"))
            .await
            .unwrap();

        assert_eq!(result.message, "Unregistered ella@mergington.edu from Drama Club");
        let stored = repository.find_by_name("Drama Club").await.unwrap().unwrap();
        assert_eq!(stored.participants(), &["scarlett@mergington.edu".to_string()]);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let handler = UnregisterHandler::new(Arc::new(InMemoryActivityRepository::seeded()));

        let result = handler.handle(command("Robotics", "ella@mergington.edu")).await;

        assert!(matches!(result, Err(ActivityError::NotFound(_))));
    }

    #[tokio::test]
    async fn non_member_conflicts_and_roster_is_unchanged() {
        let repository = Arc::new(InMemoryActivityRepository::seeded());
        let handler = UnregisterHandler::new(repository.clone());
        let before = repository.find_by_name("Drama Club").await.unwrap().unwrap();

        let result = handler
            .handle(command("Drama Club", "ghost@mergington.edu"))
            .await;

        assert!(matches!(result, Err(ActivityError::NotSignedUp { .. })));
        let after = repository.find_by_name("Drama Club").await.unwrap().unwrap();
        assert_eq!(after, before);
    }
}
