//! `cdnget package <namespace> <repository> <identifier>` – look up and optionally download.

use anyhow::{Context, Result};
use cdnget_core::config::CdngetConfig;
use cdnget_core::fetch::{CurlTransport, Fetcher};
use cdnget_core::metadata::{ApiMetadataSource, PackageRef};
use cdnget_core::package::{read_package, DownloadOptions, PackageRead};
use cdnget_core::verify::Verifier;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PackageArgs {
    pub namespace: String,
    pub repository: String,
    pub identifier: String,
    pub download: bool,
    pub download_dir: Option<PathBuf>,
    pub ignore_checksums: bool,
}

impl PackageArgs {
    /// CLI flags override config; `--ignore-checksums` can only turn the policy on.
    pub(crate) fn download_options(&self, cfg: &CdngetConfig) -> DownloadOptions {
        DownloadOptions {
            download: self.download,
            download_dir: self
                .download_dir
                .clone()
                .unwrap_or_else(|| cfg.download_dir()),
            ignore_checksums: self.ignore_checksums || cfg.ignore_checksums,
        }
    }
}

/// Console warning for a download kept despite mismatching checksums.
pub(crate) fn mismatch_warning(read: &PackageRead) -> Option<String> {
    read.mismatch.as_ref().map(|report| {
        format!(
            "warning: keeping {} with mismatching checksums (--ignore-checksums)\n{}",
            read.record.output_path, report
        )
    })
}

/// Prints the package record as JSON; a kept mismatch is reported on stderr.
pub async fn run_package(cfg: &CdngetConfig, api_key: Option<&str>, args: PackageArgs) -> Result<()> {
    let package = PackageRef::new(&args.namespace, &args.repository, &args.identifier)?;
    let options = args.download_options(cfg);
    let key = cfg.api_key(api_key)?;
    let transport = CurlTransport::new(cfg.http_options());
    let source = ApiMetadataSource::new(&cfg.api_host, transport.clone(), key.clone())?;
    let verifier = Verifier::new(Fetcher::new(transport, key));

    if options.download {
        std::fs::create_dir_all(&options.download_dir).with_context(|| {
            format!("create download dir {}", options.download_dir.display())
        })?;
    }

    let read = tokio::task::spawn_blocking(move || {
        read_package(&source, &verifier, &package, &options)
    })
    .await
    .context("package task join")??;

    if let Some(warning) = mismatch_warning(&read) {
        eprintln!("{}", warning);
    }
    println!("{}", serde_json::to_string_pretty(&read.record)?);
    Ok(())
}
