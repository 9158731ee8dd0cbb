//! Teacher credential records.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::domain::foundation::AuthenticatedTeacher;

/// A teacher account as loaded from the credential source.
#[derive(Debug)]
pub struct Teacher {
    pub email: String,
    pub name: String,
    password: SecretString,
}

impl Teacher {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Compares a presented password with the stored one.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password
            .expose_secret()
            .as_bytes()
            .ct_eq(candidate.as_bytes())
            .into()
    }

    /// Identity recorded in a session after login.
    pub fn identity(&self) -> AuthenticatedTeacher {
        AuthenticatedTeacher::new(&self.email, &self.name)
    }
}

/// Read-only lookup of teacher accounts keyed by email.
#[derive(Debug, Default)]
pub struct TeacherDirectory {
    teachers: HashMap<String, Teacher>,
}

impl TeacherDirectory {
    /// A directory with no accounts; every login fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a directory. A later record with the same email replaces an earlier one.
    pub fn from_teachers(teachers: impl IntoIterator<Item = Teacher>) -> Self {
        Self {
            teachers: teachers
                .into_iter()
                .map(|t| (t.email.clone(), t))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }

    pub fn get(&self, email: &str) -> Option<&Teacher> {
        self.teachers.get(email)
    }

    /// Returns the teacher when both email and password match.
    ///
    /// Unknown email and wrong password both yield `None`.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&Teacher> {
        self.teachers
            .get(email)
            .filter(|teacher| teacher.password_matches(password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> TeacherDirectory {
        TeacherDirectory::from_teachers([
            Teacher::new("mrodriguez@mergington.edu", "Ms. Rodriguez", "art123"),
            Teacher::new("mchen@mergington.edu", "Mr. Chen", "chess456"),
        ])
    }

    #[test]
    fn authenticate_accepts_matching_credentials() {
        let directory = directory();
        let teacher = directory
            .authenticate("mchen@mergington.edu", "chess456")
            .unwrap();
        assert_eq!(teacher.name, "Mr. Chen");
        assert_eq!(
            teacher.identity(),
            AuthenticatedTeacher::new("mchen@mergington.edu", "Mr. Chen")
        );
    }

    #[test]
    fn authenticate_rejects_wrong_password() {
        assert!(directory()
            .authenticate("mchen@mergington.edu", "chess4567")
            .is_none());
        assert!(directory().authenticate("mchen@mergington.edu", "").is_none());
    }

    #[test]
    fn authenticate_rejects_unknown_email() {
        assert!(directory()
            .authenticate("nobody@mergington.edu", "chess456")
            .is_none());
    }

    #[test]
    fn empty_directory_rejects_everyone() {
        let directory = TeacherDirectory::empty();
        assert!(directory.is_empty());
        assert!(directory.authenticate("mchen@mergington.edu", "chess456").is_none());
    }

    #[test]
    fn debug_output_hides_password() {
        let teacher = Teacher::new("a@m.edu", "A", "hunter2");
        assert!(!format!("{:?}", teacher).contains("hunter2"));
    }
}
