//! Integration test utilities for the stats server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with a mocked scraping vendor.

pub mod fixtures;
pub mod helpers;
pub mod vendor;

pub use fixtures::*;
pub use helpers::*;
