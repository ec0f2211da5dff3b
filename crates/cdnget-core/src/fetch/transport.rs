//! Transport seam between the fetcher and the HTTP client.

use std::io::{self, Write};
use thiserror::Error;
use url::Url;

/// A single GET request: target URL plus extra headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First header value with `name` (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Error from the transport layer (connection, TLS, timeout, body sink).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("curl: {0}")]
    Curl(#[from] curl::Error),

    /// Writing the response body to its destination failed.
    #[error("writing response body: {0}")]
    Body(#[source] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Performs one blocking HTTP GET.
///
/// The body of the final response (after redirects) is streamed into `body`
/// whatever its status; the returned status code lets the caller decide what
/// to keep. Timeouts and redirect policy belong to the implementation.
pub trait Transport {
    fn get(&self, request: &Request, body: &mut dyn Write) -> Result<u32, TransportError>;
}

/// True for 2xx statuses.
pub fn is_success(status: u32) -> bool {
    (200..300).contains(&status)
}
