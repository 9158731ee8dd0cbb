//! Activity aggregate.

use super::ActivityError;

/// An extracurricular activity and its roster.
///
/// Participant emails are unique and keep their signup order. The roster
/// size is not checked against `max_participants`; see [`Activity::is_over_capacity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

impl Activity {
    /// Creates an activity with an empty roster.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seeds the roster. Duplicate emails are dropped.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            let email = email.into();
            if !self.has_participant(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// True when the roster holds more students than `max_participants`.
    ///
    /// Signup does not refuse students past capacity; callers use this to
    /// report it.
    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }

    /// Appends a student to the roster.
    pub fn sign_up(&mut self, email: &str) -> Result<(), ActivityError> {
        if self.has_participant(email) {
            return Err(ActivityError::already_signed_up(&self.name, email));
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    /// Removes a student from the roster, keeping the order of the others.
    pub fn unregister(&mut self, email: &str) -> Result<(), ActivityError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| ActivityError::not_signed_up(&self.name, email))?;
        self.participants.remove(position);
        Ok(())
    }
}
