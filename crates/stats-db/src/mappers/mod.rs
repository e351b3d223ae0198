//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain objects.

mod stats;
mod trend;
mod user;
