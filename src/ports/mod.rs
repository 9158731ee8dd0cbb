//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ActivityRepository` - Activity registry persistence
//! - `SessionStore` - Token to teacher identity mapping
//! - `CredentialStore` - Startup source of teacher accounts

mod activity_repository;
mod credential_store;
mod session_store;

pub use activity_repository::ActivityRepository;
pub use credential_store::{CredentialError, CredentialStore};
pub use session_store::SessionStore;
