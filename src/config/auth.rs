//! Authentication configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Authentication configuration (teacher credential file)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// JSON file holding `{"teachers": {email: {name, password}}}`
    #[serde(default = "default_teachers_file")]
    pub teachers_file: PathBuf,
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.teachers_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__TEACHERS_FILE"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            teachers_file: default_teachers_file(),
        }
    }
}

fn default_teachers_file() -> PathBuf {
    PathBuf::from("teachers.json")
}
