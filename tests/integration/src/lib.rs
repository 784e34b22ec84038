//! Integration test utilities for the guild attendance server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with live Postgres and Redis instances.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
