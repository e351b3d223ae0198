//! Static shared-token authentication

mod api_token;

pub use api_token::{ApiTokens, API_TOKEN_HEADER};
