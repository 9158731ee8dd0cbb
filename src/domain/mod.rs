//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (session tokens, auth types, errors)
//! - `activity` - Activity aggregate, roster rules and the seed catalog
//! - `teacher` - Teacher credential records and the credential directory

pub mod activity;
pub mod foundation;
pub mod teacher;
