//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod stats;
pub mod trends;
pub mod users;
