//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Session middleware and extractors

pub mod auth;

pub use auth::{
    auth_middleware, AuthRejection, AuthState, BearerToken, OptionalAuth, RequireAuth,
};
