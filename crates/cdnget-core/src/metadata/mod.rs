//! Package metadata lookup.
//!
//! The metadata API is the trusted source for a package's CDN URL and its
//! published checksums. Digests obtained here are what a download is
//! verified against.

mod api;

pub use api::ApiMetadataSource;

use crate::checksum::{Algorithm, DigestSet};
use anyhow::{ensure, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifies one package: `{namespace}/{repository}/{identifier}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    pub namespace: String,
    pub repository: String,
    pub identifier: String,
}

impl PackageRef {
    /// Builds a reference; every part must be non-empty.
    pub fn new(
        namespace: impl Into<String>,
        repository: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self> {
        let r = Self {
            namespace: namespace.into(),
            repository: repository.into(),
            identifier: identifier.into(),
        };
        ensure!(!r.namespace.trim().is_empty(), "namespace must not be empty");
        ensure!(!r.repository.trim().is_empty(), "repository must not be empty");
        ensure!(!r.identifier.trim().is_empty(), "identifier must not be empty");
        Ok(r)
    }
}

/// Package fields returned by the metadata API. Missing or `null` fields
/// decode as empty/false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub cdn_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug_perm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub checksum_md5: String,
    #[serde(deserialize_with = "null_as_default")]
    pub checksum_sha1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub checksum_sha256: String,
    #[serde(deserialize_with = "null_as_default")]
    pub checksum_sha512: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_sync_awaiting: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_sync_completed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_sync_failed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_sync_in_flight: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_sync_in_progress: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PackageMetadata {
    /// Published checksums; blank ones are left unasserted.
    pub fn expected_digests(&self) -> DigestSet {
        DigestSet::new()
            .with(Algorithm::Md5, &self.checksum_md5)
            .with(Algorithm::Sha1, &self.checksum_sha1)
            .with(Algorithm::Sha256, &self.checksum_sha256)
            .with(Algorithm::Sha512, &self.checksum_sha512)
    }
}

/// Source of package metadata.
pub trait MetadataSource {
    fn read_package(&self, package: &PackageRef) -> Result<PackageMetadata>;
}
