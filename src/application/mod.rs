//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate rosters and sessions; query handlers only read.

pub mod handlers;

pub use handlers::{
    // Activity handlers
    ListActivitiesHandler, SignUpCommand, SignUpHandler, SignUpResult, UnregisterCommand,
    UnregisterHandler, UnregisterResult,
    // Auth handlers
    parse_bearer, require_authenticated, LoginCommand, LoginHandler, LoginOutcome, LogoutHandler,
};
