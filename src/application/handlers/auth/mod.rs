//! Teacher authentication handlers.

mod login;
mod logout;
mod require_authenticated;

pub use login::{LoginCommand, LoginHandler, LoginOutcome};
pub use logout::LogoutHandler;
pub use require_authenticated::{parse_bearer, require_authenticated};
