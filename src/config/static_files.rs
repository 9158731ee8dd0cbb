//! Static asset configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Directory served under `/static`
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl StaticFilesConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STATIC_FILES__DIR"));
        }
        Ok(())
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("static")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_empty_dir() {
        let config = StaticFilesConfig { dir: PathBuf::new() };
        assert!(config.validate().is_err());
        assert!(StaticFilesConfig::default().validate().is_ok());
    }
}
