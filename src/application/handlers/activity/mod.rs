//! Activity command and query handlers.

mod list_activities;
mod sign_up;
mod unregister;

pub use list_activities::ListActivitiesHandler;
pub use sign_up::{SignUpCommand, SignUpHandler, SignUpResult};
pub use unregister::{UnregisterCommand, UnregisterHandler, UnregisterResult};
