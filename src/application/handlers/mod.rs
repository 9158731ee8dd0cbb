//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod activity;
pub mod auth;

pub use activity::{
    ListActivitiesHandler, SignUpCommand, SignUpHandler, SignUpResult, UnregisterCommand,
    UnregisterHandler, UnregisterResult,
};
pub use auth::{
    parse_bearer, require_authenticated, LoginCommand, LoginHandler, LoginOutcome, LogoutHandler,
};
