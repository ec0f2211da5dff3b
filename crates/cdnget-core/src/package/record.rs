//! Caller-visible record for a package read.

use crate::checksum::{Algorithm, DigestSet};
use crate::metadata::{PackageMetadata, PackageRef};
use crate::verify::VerificationOutcome;
use serde::Serialize;
use std::path::Path;

/// Fields reported for a package, with download results when a download ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    /// `{namespace}_{repository}_{slug_perm}`.
    pub id: String,
    pub cdn_url: String,
    pub format: String,
    pub name: String,
    pub version: String,
    pub slug: String,
    pub slug_perm: String,
    pub is_sync_awaiting: bool,
    pub is_sync_completed: bool,
    pub is_sync_failed: bool,
    pub is_sync_in_flight: bool,
    pub is_sync_in_progress: bool,
    pub checksum_md5: String,
    pub checksum_sha1: String,
    pub checksum_sha256: String,
    pub checksum_sha512: String,
    /// Local file, or the CDN URL when nothing was downloaded.
    pub output_path: String,
    /// Download directory, empty when nothing was downloaded.
    pub output_directory: String,
}

impl PackageRecord {
    /// Record for a metadata-only read: the CDN URL stands in for the path
    /// and the published checksums pass through.
    pub fn from_metadata(package: &PackageRef, meta: &PackageMetadata) -> Self {
        Self {
            id: format!(
                "{}_{}_{}",
                package.namespace, package.repository, meta.slug_perm
            ),
            cdn_url: meta.cdn_url.clone(),
            format: meta.format.clone(),
            name: meta.name.clone(),
            version: meta.version.clone(),
            slug: meta.slug.clone(),
            slug_perm: meta.slug_perm.clone(),
            is_sync_awaiting: meta.is_sync_awaiting,
            is_sync_completed: meta.is_sync_completed,
            is_sync_failed: meta.is_sync_failed,
            is_sync_in_flight: meta.is_sync_in_flight,
            is_sync_in_progress: meta.is_sync_in_progress,
            checksum_md5: meta.checksum_md5.clone(),
            checksum_sha1: meta.checksum_sha1.clone(),
            checksum_sha256: meta.checksum_sha256.clone(),
            checksum_sha512: meta.checksum_sha512.clone(),
            output_path: meta.cdn_url.clone(),
            output_directory: String::new(),
        }
    }

    /// Applies a kept download: local path, directory and the observed digests.
    /// Returns `None` for a `Failed` outcome.
    pub fn with_download(mut self, outcome: &VerificationOutcome, dir: &Path) -> Option<Self> {
        let path = outcome.path()?;
        let observed = outcome.observed()?;
        self.output_path = path.display().to_string();
        self.output_directory = dir.display().to_string();
        self.set_checksums(observed);
        Some(self)
    }

    fn set_checksums(&mut self, digests: &DigestSet) {
        let get = |a| digests.get(a).unwrap_or_default().to_string();
        self.checksum_md5 = get(Algorithm::Md5);
        self.checksum_sha1 = get(Algorithm::Sha1);
        self.checksum_sha256 = get(Algorithm::Sha256);
        self.checksum_sha512 = get(Algorithm::Sha512);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::MismatchReport;
    use std::path::PathBuf;

    fn meta() -> PackageMetadata {
        PackageMetadata {
            cdn_url: "https://dl.example.com/acme/tools/tool.tgz".to_string(),
            format: "raw".to_string(),
            name: "tool".to_string(),
            version: "3.1".to_string(),
            slug: "tool-xyz".to_string(),
            slug_perm: "PeRm1".to_string(),
            checksum_md5: "expected-md5".to_string(),
            checksum_sha256: "expected-sha256".to_string(),
            is_sync_completed: true,
            ..PackageMetadata::default()
        }
    }

    fn pkg() -> PackageRef {
        PackageRef::new("acme", "tools", "id1").unwrap()
    }

    #[test]
    fn metadata_only_record() {
        let r = PackageRecord::from_metadata(&pkg(), &meta());
        assert_eq!(r.id, "acme_tools_PeRm1");
        assert_eq!(r.output_path, "https://dl.example.com/acme/tools/tool.tgz");
        assert_eq!(r.output_directory, "");
        assert_eq!(r.checksum_md5, "expected-md5");
        assert_eq!(r.checksum_sha1, "");
        assert!(r.is_sync_completed);
    }

    #[test]
    fn download_record_reports_observed_digests() {
        let observed = DigestSet::new()
            .with(Algorithm::Md5, "m")
            .with(Algorithm::Sha1, "s1")
            .with(Algorithm::Sha256, "s256")
            .with(Algorithm::Sha512, "s512");
        let outcome = VerificationOutcome::AcceptedWithMismatch {
            path: PathBuf::from("/tmp/dl/tool.tgz"),
            observed,
            report: MismatchReport::default(),
        };
        let r = PackageRecord::from_metadata(&pkg(), &meta())
            .with_download(&outcome, Path::new("/tmp/dl"))
            .unwrap();
        assert_eq!(r.output_path, "/tmp/dl/tool.tgz");
        assert_eq!(r.output_directory, "/tmp/dl");
        assert_eq!(r.checksum_md5, "m");
        assert_eq!(r.checksum_sha1, "s1");
        assert_eq!(r.checksum_sha256, "s256");
        assert_eq!(r.checksum_sha512, "s512");
    }

    #[test]
    fn failed_outcome_has_no_record() {
        let outcome = VerificationOutcome::Failed(MismatchReport::default());
        assert!(PackageRecord::from_metadata(&pkg(), &meta())
            .with_download(&outcome, Path::new("/tmp"))
            .is_none());
    }
}
