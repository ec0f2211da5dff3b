//! libcurl-backed transport.

use super::transport::{Request, Transport, TransportError};
use std::io::{self, Write};
use std::time::Duration;

/// Connection and timeout settings applied to every transfer.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    /// Hard limit for the whole transfer.
    pub timeout: Duration,
    pub max_redirections: u32,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(3600),
            max_redirections: 10,
            user_agent: concat!("cdnget/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Blocking transport using one curl `Easy` handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    options: HttpOptions,
}

impl CurlTransport {
    pub fn new(options: HttpOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HttpOptions {
        &self.options
    }
}

impl Transport for CurlTransport {
    fn get(&self, request: &Request, body: &mut dyn Write) -> Result<u32, TransportError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(request.url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.options.max_redirections)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        // Abort if throughput drops below 1 KiB/s for 60s.
        easy.low_speed_limit(1024)?;
        easy.low_speed_time(Duration::from_secs(60))?;
        easy.timeout(self.options.timeout)?;
        easy.useragent(&self.options.user_agent)?;

        let mut list = curl::easy::List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !request.headers.is_empty() {
            easy.http_headers(list)?;
        }

        let mut write_error: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match body.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = write_error {
            return Err(TransportError::Body(e));
        }
        performed?;

        let code = easy.response_code()?;
        tracing::debug!(url = %request.url, status = code, "GET finished");
        Ok(code)
    }
}
