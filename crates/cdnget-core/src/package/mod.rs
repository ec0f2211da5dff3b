//! Package read: metadata lookup, optional verified download, record.

mod record;

pub use record::PackageRecord;

use crate::fetch::Transport;
use crate::metadata::{MetadataSource, PackageRef};
use crate::verify::{MismatchReport, VerificationOutcome, Verifier, VerifyPolicy};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// What to do after the metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Download and verify the package; otherwise only report its CDN URL.
    pub download: bool,
    pub download_dir: PathBuf,
    pub ignore_checksums: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            download: false,
            download_dir: std::env::temp_dir(),
            ignore_checksums: false,
        }
    }
}

/// Result of a package read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRead {
    pub record: PackageRecord,
    /// Set when `ignore_checksums` kept a download whose digests still differ.
    pub mismatch: Option<MismatchReport>,
}

/// Looks up `package` and, when `options.download` is set, downloads and
/// verifies it.
///
/// A checksum failure after the cache-busting retry is an error whose message
/// is the per-algorithm mismatch report.
pub fn read_package<M, T>(
    source: &M,
    verifier: &Verifier<T>,
    package: &PackageRef,
    options: &DownloadOptions,
) -> Result<PackageRead>
where
    M: MetadataSource + ?Sized,
    T: Transport,
{
    let meta = source.read_package(package).with_context(|| {
        format!(
            "read package {}/{}/{}",
            package.namespace, package.repository, package.identifier
        )
    })?;
    let record = PackageRecord::from_metadata(package, &meta);

    if !options.download {
        return Ok(PackageRead {
            record,
            mismatch: None,
        });
    }

    let expected = meta.expected_digests();
    let policy = VerifyPolicy {
        ignore_checksums: options.ignore_checksums,
    };
    let outcome = verifier
        .run(&meta.cdn_url, &options.download_dir, &expected, policy)?
        .into_result()?;

    let record = record
        .with_download(&outcome, &options.download_dir)
        .context("download produced no file")?;
    let mismatch = match outcome {
        VerificationOutcome::AcceptedWithMismatch { report, .. } => Some(report),
        _ => None,
    };
    Ok(PackageRead { record, mismatch })
}
