//! Teacher domain module.
//!
//! Teachers are the only accounts in the system. Their records are loaded
//! once at startup and never change while the service runs.

mod directory;

pub use directory::{Teacher, TeacherDirectory};
