//! JSON file credential store.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::teacher::{Teacher, TeacherDirectory};
use crate::ports::{CredentialError, CredentialStore};

/// On-disk shape of the credentials file.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    teachers: HashMap<String, TeacherEntry>,
}

#[derive(Debug, Deserialize)]
struct TeacherEntry {
    name: String,
    password: String,
}

/// Loads teacher accounts from a JSON file.
pub struct JsonFileCredentialStore {
    path: PathBuf,
}

impl JsonFileCredentialStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn parse(&self, content: &str) -> Result<TeacherDirectory, CredentialError> {
        let file: CredentialsFile =
            serde_json::from_str(content).map_err(|e| CredentialError::Malformed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(TeacherDirectory::from_teachers(file.teachers.into_iter().map(
            |(email, entry)| Teacher::new(email, entry.name, entry.password),
        )))
    }
}

#[async_trait]
impl CredentialStore for JsonFileCredentialStore {
    async fn load(&self) -> Result<TeacherDirectory, CredentialError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Credentials file {} not found; no teacher can sign in",
                    self.path.display()
                );
                return Ok(TeacherDirectory::empty());
            }
            Err(e) => {
                return Err(CredentialError::Unreadable {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                })
            }
        };

        let directory = self.parse(&content)?;
        tracing::info!(
            "Loaded {} teacher account(s) from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }
}
