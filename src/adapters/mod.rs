//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `credentials` - Teacher credential file loading
//! - `http` - axum routers, handlers and middleware
//! - `storage` - In-memory activity registry and session store

pub mod credentials;
pub mod http;
pub mod storage;

pub use credentials::JsonFileCredentialStore;
pub use storage::{InMemoryActivityRepository, InMemorySessionStore};
