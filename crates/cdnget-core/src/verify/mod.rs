//! Verified download: fetch, hash, compare, and retry once with cache busting.
//!
//! Flow per call:
//! 1. Fetch without cache busting, hash the file, compare with the expected set.
//! 2. On mismatch, fetch once more with `time=<now>` and compare again.
//! 3. Still mismatched: accept with the observed digests if `ignore_checksums`,
//!    otherwise return `Failed` with a per-algorithm report.
//!
//! Transport, HTTP status and I/O errors abort immediately without a retry.

mod report;
mod step;

pub use report::{Mismatch, MismatchReport};
pub use step::{decide, Step, Transition, MAX_ATTEMPTS};

use crate::checksum::{self, DigestSet};
use crate::error::VerifyError;
use crate::fetch::{Fetcher, Transport};
use std::path::{Path, PathBuf};

/// Caller policy for a verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyPolicy {
    /// Keep a file whose digests still differ after the retry.
    pub ignore_checksums: bool,
}

/// Terminal result of a verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Every expected digest matched.
    Verified { path: PathBuf, observed: DigestSet },
    /// Digests differ but `ignore_checksums` was set; `observed` is what was downloaded.
    AcceptedWithMismatch {
        path: PathBuf,
        observed: DigestSet,
        report: MismatchReport,
    },
    /// Digests differ after the retry.
    Failed(MismatchReport),
}

impl VerificationOutcome {
    /// Local file for `Verified`/`AcceptedWithMismatch`.
    pub fn path(&self) -> Option<&Path> {
        match self {
            VerificationOutcome::Verified { path, .. }
            | VerificationOutcome::AcceptedWithMismatch { path, .. } => Some(path),
            VerificationOutcome::Failed(_) => None,
        }
    }

    /// Digests of the kept file.
    pub fn observed(&self) -> Option<&DigestSet> {
        match self {
            VerificationOutcome::Verified { observed, .. }
            | VerificationOutcome::AcceptedWithMismatch { observed, .. } => Some(observed),
            VerificationOutcome::Failed(_) => None,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified { .. })
    }

    /// Turns `Failed` into `VerifyError::ChecksumMismatch`.
    pub fn into_result(self) -> Result<Self, VerifyError> {
        match self {
            VerificationOutcome::Failed(report) => Err(VerifyError::ChecksumMismatch(report)),
            other => Ok(other),
        }
    }
}

/// Runs the verified-download protocol over a `Fetcher`.
#[derive(Debug, Clone)]
pub struct Verifier<T> {
    fetcher: Fetcher<T>,
}

impl<T: Transport> Verifier<T> {
    pub fn new(fetcher: Fetcher<T>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &Fetcher<T> {
        &self.fetcher
    }

    /// Download `url` into `dir` and verify it against `expected`.
    ///
    /// An empty `expected` set verifies after one fetch.
    pub fn run(
        &self,
        url: &str,
        dir: &Path,
        expected: &DigestSet,
        policy: VerifyPolicy,
    ) -> Result<VerificationOutcome, VerifyError> {
        if expected.is_empty() {
            tracing::debug!(url, "no published checksums; download will not be verified");
        }

        let mut step = Step::first();
        loop {
            let attempt = self.fetcher.download(url, dir, step.bust_cache)?;
            let observed = checksum::compute_path(&attempt.path)
                .map_err(|e| VerifyError::io(&attempt.path, e))?;
            let report = MismatchReport::compare(expected, &observed);

            match decide(step, &report, policy) {
                Transition::Verified => {
                    tracing::info!(
                        attempt = step.attempt,
                        bytes = attempt.bytes_written,
                        "verified {}",
                        attempt.path.display()
                    );
                    return Ok(VerificationOutcome::Verified {
                        path: attempt.path,
                        observed,
                    });
                }
                Transition::Retry(next) => {
                    tracing::warn!(
                        algorithms = ?report.algorithms(),
                        "checksum mismatch for {}; pulling again with cache busting",
                        attempt.url
                    );
                    step = next;
                }
                Transition::AcceptMismatch => {
                    tracing::warn!(
                        "ignore_checksums set; keeping {} despite mismatch:\n{}",
                        attempt.path.display(),
                        report
                    );
                    return Ok(VerificationOutcome::AcceptedWithMismatch {
                        path: attempt.path,
                        observed,
                        report,
                    });
                }
                Transition::Fail => {
                    tracing::warn!("checksum verification failed for {}", attempt.url);
                    return Ok(VerificationOutcome::Failed(report));
                }
            }
        }
    }
}
