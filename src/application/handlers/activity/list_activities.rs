//! ListActivitiesHandler - Query handler for the full activity registry.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityError};
use crate::ports::ActivityRepository;

/// Handler for listing every activity with its roster.
pub struct ListActivitiesHandler {
    repository: Arc<dyn ActivityRepository>,
}

impl ListActivitiesHandler {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Activity>, ActivityError> {
        Ok(self.repository.find_all().await?)
    }
}
