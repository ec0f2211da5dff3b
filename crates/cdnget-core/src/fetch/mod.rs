//! Authenticated CDN fetch of one artifact to local storage.
//!
//! The file name comes from the URL path; with `bust_cache` the request
//! carries a `time=<unix seconds>` query parameter so edge caches treat it as
//! a new key and go back to origin.

mod http;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use http::{CurlTransport, HttpOptions};
pub use transport::{is_success, Request, Transport, TransportError};

use crate::credentials::ApiKey;
use crate::error::VerifyError;
use crate::storage::PartFile;
use crate::url_model;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

/// One completed download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadAttempt {
    /// URL actually requested (including any cache-busting parameter).
    pub url: Url,
    pub cache_busted: bool,
    pub path: PathBuf,
    pub bytes_written: u64,
}

/// Downloads artifacts through an injected transport, authenticating with an API key.
#[derive(Debug, Clone)]
pub struct Fetcher<T> {
    transport: T,
    api_key: ApiKey,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, api_key: ApiKey) -> Self {
        Self { transport, api_key }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `url` and stream the body to `dir/<last url path segment>`,
    /// overwriting any existing file.
    ///
    /// A non-2xx status is an error; the previous file at the destination (if
    /// any) is left untouched in that case.
    pub fn download(
        &self,
        url: &str,
        dir: &Path,
        bust_cache: bool,
    ) -> Result<DownloadAttempt, VerifyError> {
        let parsed = Url::parse(url).map_err(|e| VerifyError::Transport {
            url: url.to_string(),
            source: e.into(),
        })?;
        let target = if bust_cache {
            url_model::with_cache_buster(&parsed, unix_now())
        } else {
            parsed
        };
        let path = dir.join(url_model::local_filename(&target));

        let request =
            Request::get(target.clone()).header("Authorization", self.api_key.authorization());

        tracing::debug!(url = %target, bust_cache, dest = %path.display(), "downloading");
        let mut part = PartFile::create(&path)
            .map_err(|e| VerifyError::io(crate::storage::temp_path(&path), e))?;

        let status = self
            .transport
            .get(&request, &mut part)
            .map_err(|source| VerifyError::Transport {
                url: target.to_string(),
                source,
            })?;
        if !is_success(status) {
            return Err(VerifyError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let bytes_written = part.finalize().map_err(|e| VerifyError::io(&path, e))?;
        tracing::debug!(bytes = bytes_written, dest = %path.display(), "download written");

        Ok(DownloadAttempt {
            url: target,
            cache_busted: bust_cache,
            path,
            bytes_written,
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
