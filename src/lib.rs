//! Activity Roster - Extracurricular Activity Sign-up Service
//!
//! This crate serves Mergington High School's activity catalog and lets
//! signed-in teachers add and remove students from activity rosters.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
