//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` assembles them into the served application.

pub mod activities;
pub mod auth;
pub mod middleware;
pub mod router;

// Re-export key types for convenience
pub use activities::{activity_routes, ActivityHandlers};
pub use auth::{auth_routes, AuthHandlers};
pub use router::{app_router, apply_server_layers, AppState};
