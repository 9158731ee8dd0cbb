//! Storage Adapters
//!
//! In-memory implementations of the registry and session ports.
//!
//! ## Available Adapters
//!
//! - **InMemoryActivityRepository** - Activity registry seeded from the catalog
//! - **InMemorySessionStore** - Active teacher sessions
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryActivityRepository, InMemorySessionStore};
//!
//! let activities = Arc::new(InMemoryActivityRepository::seeded());
//! let sessions = Arc::new(InMemorySessionStore::new());
//! ```

mod in_memory_activity_repository;
mod in_memory_session_store;

pub use in_memory_activity_repository::InMemoryActivityRepository;
pub use in_memory_session_store::InMemorySessionStore;
