//! `cdnget fetch <url>` – verified download of a direct URL.

use anyhow::{Context, Result};
use cdnget_core::checksum::{Algorithm, DigestSet};
use cdnget_core::config::CdngetConfig;
use cdnget_core::fetch::{CurlTransport, Fetcher};
use cdnget_core::verify::{VerificationOutcome, Verifier, VerifyPolicy};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchArgs {
    pub url: String,
    pub dir: Option<PathBuf>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    pub sha512: Option<String>,
    pub ignore_checksums: bool,
}

impl FetchArgs {
    pub(crate) fn expected(&self) -> DigestSet {
        DigestSet::new()
            .with_opt(Algorithm::Md5, self.md5.as_deref())
            .with_opt(Algorithm::Sha1, self.sha1.as_deref())
            .with_opt(Algorithm::Sha256, self.sha256.as_deref())
            .with_opt(Algorithm::Sha512, self.sha512.as_deref())
    }
}

pub async fn run_fetch(cfg: &CdngetConfig, api_key: Option<&str>, args: FetchArgs) -> Result<()> {
    let expected = args.expected();
    let dir = args.dir.clone().unwrap_or_else(|| cfg.download_dir());
    let policy = VerifyPolicy {
        ignore_checksums: args.ignore_checksums || cfg.ignore_checksums,
    };
    let key = cfg.api_key(api_key)?;
    let verifier = Verifier::new(Fetcher::new(CurlTransport::new(cfg.http_options()), key));

    std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    let url = args.url.clone();
    let outcome = tokio::task::spawn_blocking(move || verifier.run(&url, &dir, &expected, policy))
        .await
        .context("download task join")??
        .into_result()?;

    match &outcome {
        VerificationOutcome::Verified { path, .. } => println!("verified {}", path.display()),
        VerificationOutcome::AcceptedWithMismatch { path, report, .. } => {
            eprintln!("{}", report);
            println!("kept (checksums ignored) {}", path.display());
        }
        VerificationOutcome::Failed(_) => {}
    }
    if let Some(observed) = outcome.observed() {
        for (algorithm, hex) in observed.iter() {
            println!("{:<7}{}", algorithm.label(), hex);
        }
    }
    Ok(())
}
