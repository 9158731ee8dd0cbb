//! SignUpHandler - Command handler for adding a student to a roster.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityError};
use crate::domain::foundation::AuthenticatedTeacher;
use crate::ports::ActivityRepository;

/// Command to sign a student up for an activity.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub activity_name: String,
    pub email: String,
    pub requested_by: AuthenticatedTeacher,
}

/// Result of a successful signup.
#[derive(Debug, Clone)]
pub struct SignUpResult {
    pub activity: Activity,
    pub message: String,
}

/// Handler for signing students up.
pub struct SignUpHandler {
    repository: Arc<dyn ActivityRepository>,
}

impl SignUpHandler {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResult, ActivityError> {
        // 1. Load activity
        let mut activity = self
            .repository
            .find_by_name(&cmd.activity_name)
            .await?
            .ok_or_else(|| ActivityError::not_found(&cmd.activity_name))?;

        // 2. Add student
        activity.sign_up(&cmd.email)?;

        // 3. Persist
        self.repository.update(&activity).await?;

        tracing::info!(
            activity = %cmd.activity_name,
            student = %cmd.email,
            teacher = %cmd.requested_by.email,
            "Student signed up"
        );
        if activity.is_over_capacity() {
            tracing::warn!(
                activity = %cmd.activity_name,
                participants = activity.participants().len(),
                max_participants = activity.max_participants(),
                "Roster exceeds activity capacity"
            );
        }

        Ok(SignUpResult {
            message: format!("Signed up {} for {}", cmd.email, cmd.activity_name),
            activity,
        })
    }
}
