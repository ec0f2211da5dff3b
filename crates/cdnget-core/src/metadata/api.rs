//! Metadata lookup over the package API.

use super::{MetadataSource, PackageMetadata, PackageRef};
use crate::credentials::ApiKey;
use crate::fetch::{is_success, Request, Transport};
use anyhow::{anyhow, bail, Context, Result};
use url::Url;

/// Reads package metadata from `{api_host}/v1/packages/{namespace}/{repository}/{identifier}/`.
#[derive(Debug, Clone)]
pub struct ApiMetadataSource<T> {
    api_host: Url,
    transport: T,
    api_key: ApiKey,
}

impl<T: Transport> ApiMetadataSource<T> {
    pub fn new(api_host: &str, transport: T, api_key: ApiKey) -> Result<Self> {
        let api_host = Url::parse(api_host).with_context(|| format!("invalid api_host: {api_host}"))?;
        if api_host.cannot_be_a_base() {
            bail!("invalid api_host: {api_host}");
        }
        Ok(Self {
            api_host,
            transport,
            api_key,
        })
    }

    /// URL of the package detail endpoint; path parts are percent-encoded.
    pub fn package_url(&self, package: &PackageRef) -> Result<Url> {
        let mut url = self.api_host.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("invalid api_host: {}", self.api_host))?
            .pop_if_empty()
            .extend([
                "v1",
                "packages",
                package.namespace.as_str(),
                package.repository.as_str(),
                package.identifier.as_str(),
                "",
            ]);
        Ok(url)
    }
}

impl<T: Transport> MetadataSource for ApiMetadataSource<T> {
    fn read_package(&self, package: &PackageRef) -> Result<PackageMetadata> {
        let url = self.package_url(package)?;
        let request = Request::get(url.clone())
            .header("Authorization", self.api_key.authorization())
            .header("Accept", "application/json");

        let mut body = Vec::new();
        let status = self
            .transport
            .get(&request, &mut body)
            .with_context(|| format!("GET {url}"))?;
        if !is_success(status) {
            let detail = String::from_utf8_lossy(&body);
            bail!(
                "package lookup {}/{}/{} returned HTTP {}: {}",
                package.namespace,
                package.repository,
                package.identifier,
                status,
                detail.trim()
            );
        }

        let meta: PackageMetadata = serde_json::from_slice(&body)
            .with_context(|| format!("decode package metadata from {url}"))?;
        tracing::debug!(
            name = %meta.name,
            version = %meta.version,
            cdn_url = %meta.cdn_url,
            "package metadata read"
        );
        Ok(meta)
    }
}
