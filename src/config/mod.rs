//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ACTIVITY_ROSTER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use activity_roster::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}:{}", config.server.host, config.server.port);
//! ```

mod auth;
mod error;
mod server;
mod static_files;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use static_files::StaticFilesConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every value has a default, so the service starts with no environment at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Teacher credential source
    #[serde(default)]
    pub auth: AuthConfig,

    /// Front-end asset directory
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ACTIVITY_ROSTER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `ACTIVITY_ROSTER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ACTIVITY_ROSTER__AUTH__TEACHERS_FILE=...` -> `auth.teachers_file = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ACTIVITY_ROSTER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate()?;
        self.static_files.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::Path;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("ACTIVITY_ROSTER__SERVER__PORT");
        env::remove_var("ACTIVITY_ROSTER__SERVER__ENVIRONMENT");
        env::remove_var("ACTIVITY_ROSTER__AUTH__TEACHERS_FILE");
        env::remove_var("ACTIVITY_ROSTER__STATIC_FILES__DIR");
    }

    #[test]
    fn test_load_with_no_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.auth.teachers_file, Path::new("teachers.json"));
        assert_eq!(config.static_files.dir, Path::new("static"));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ACTIVITY_ROSTER__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ACTIVITY_ROSTER__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_custom_paths() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ACTIVITY_ROSTER__AUTH__TEACHERS_FILE", "/etc/roster/teachers.json");
        env::set_var("ACTIVITY_ROSTER__STATIC_FILES__DIR", "/srv/roster");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.auth.teachers_file, Path::new("/etc/roster/teachers.json"));
        assert_eq!(config.static_files.dir, Path::new("/srv/roster"));
    }
}
