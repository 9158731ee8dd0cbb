//! HTTP adapter for teacher authentication endpoints.
//!
//! - `POST /auth/login` - Exchange email and password for a session token
//! - `POST /auth/logout` - End the presented session
//! - `GET /auth/status` - Report who the presented token belongs to

mod dto;
mod handlers;
mod routes;

pub use dto::{AuthStatusResponse, LoginRequest, LoginResponse, LogoutResponse};
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
