//! Activity domain module.
//!
//! An activity is a named extracurricular offering with a roster of
//! participant emails. Teachers add and remove students; nothing else
//! changes after startup.

mod aggregate;
mod catalog;
mod errors;

pub use aggregate::Activity;
pub use catalog::mergington_catalog;
pub use errors::ActivityError;
