//! Integration test utilities for the back office API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with in-memory backends.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
