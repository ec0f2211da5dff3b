//! API credential sent with every request.

use std::fmt;

/// API key, sent verbatim as `Authorization: Token <key>`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Token {}", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the key itself.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
