//! Checksum command: compute every supported digest of a file.

use anyhow::{Context, Result};
use cdnget_core::checksum::{self, Algorithm};
use std::path::Path;

/// Compute and print MD5, SHA-1, SHA-256 and SHA-512 of the given file.
pub async fn run_checksum(path: &Path) -> Result<()> {
    let owned = path.to_path_buf();
    let digests = tokio::task::spawn_blocking(move || checksum::compute_path(&owned))
        .await
        .context("checksum task join")?
        .with_context(|| format!("read {}", path.display()))?;
    for algorithm in Algorithm::ALL {
        if let Some(hex) = digests.get(algorithm) {
            println!("{:<7}{}  {}", algorithm.label(), hex, path.display());
        }
    }
    Ok(())
}
