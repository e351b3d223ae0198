//! Accepted `api_token` header values

use std::collections::HashSet;

/// Name of the request header carrying the shared token
pub const API_TOKEN_HEADER: &str = "api_token";

/// Set of tokens accepted by the API
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiTokens {
    tokens: HashSet<String>,
}

impl ApiTokens {
    /// Parse a comma-separated token list, ignoring blanks
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: raw
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Check whether a presented token is accepted
    pub fn accepts(&self, token: &str) -> bool {
        !token.is_empty() && self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Debug for ApiTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print the secrets themselves
        f.debug_struct("ApiTokens").field("count", &self.tokens.len()).finish()
    }
}
