//! Errors surfaced by a verified download.

use crate::fetch::TransportError;
use crate::verify::MismatchReport;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a verified download.
///
/// Transport, HTTP status and I/O failures abort the verification immediately.
/// `ChecksumMismatch` is only produced from a `Failed` outcome, after the
/// cache-busting retry also mismatched.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Request could not be built or the transfer failed.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    /// Server answered with a non-2xx status.
    #[error("failed to download file: {url}, status code: {status}")]
    HttpStatus { url: String, status: u32 },

    /// Local file create/write/read/rename failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Downloaded bytes still disagree with the published digests.
    #[error("{0}")]
    ChecksumMismatch(MismatchReport),
}

impl VerifyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VerifyError::Io {
            path: path.into(),
            source,
        }
    }
}
