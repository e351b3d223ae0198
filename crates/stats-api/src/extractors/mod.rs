//! Axum extractors for request handling
//!
//! Custom extractors for token authentication, validation, and path/query parsing.

mod api_token;
mod path;
mod query;
mod validated;

pub use api_token::ApiToken;
pub use path::NicknamePath;
pub use query::ValidatedQuery;
pub use validated::ValidatedJson;
