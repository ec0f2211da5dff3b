//! CLI for cdnget.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cdnget_core::config;
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_fetch, run_package, FetchArgs, PackageArgs};

/// Top-level CLI for cdnget.
#[derive(Debug, Parser)]
#[command(name = "cdnget")]
#[command(about = "cdnget: download packages from a CDN and verify their published checksums", long_about = None)]
pub struct Cli {
    /// API key sent as `Authorization: Token <key>`.
    #[arg(long, global = true, env = "CDNGET_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up a package and optionally download and verify it.
    Package {
        /// Namespace (organization) owning the repository.
        namespace: String,
        /// Repository containing the package.
        repository: String,
        /// Package identifier (slug_perm).
        identifier: String,
        /// Download the package and verify its checksums.
        #[arg(long)]
        download: bool,
        /// Directory to download into (default: config download_dir, then the temp dir).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
        /// Keep the file even if checksums still mismatch after the retry.
        #[arg(long)]
        ignore_checksums: bool,
    },

    /// Download a URL directly and verify it against the given checksums.
    Fetch {
        /// Direct HTTP/HTTPS URL to download.
        url: String,
        /// Directory to download into.
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        #[arg(long, value_name = "HEX")]
        md5: Option<String>,
        #[arg(long, value_name = "HEX")]
        sha1: Option<String>,
        #[arg(long, value_name = "HEX")]
        sha256: Option<String>,
        #[arg(long, value_name = "HEX")]
        sha512: Option<String>,
        /// Keep the file even if checksums still mismatch after the retry.
        #[arg(long)]
        ignore_checksums: bool,
    },

    /// Compute MD5, SHA-1, SHA-256 and SHA-512 of a local file.
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Package {
                namespace,
                repository,
                identifier,
                download,
                download_dir,
                ignore_checksums,
            } => {
                let args = PackageArgs {
                    namespace,
                    repository,
                    identifier,
                    download,
                    download_dir,
                    ignore_checksums,
                };
                run_package(&cfg, cli.api_key.as_deref(), args).await?;
            }
            CliCommand::Fetch {
                url,
                dir,
                md5,
                sha1,
                sha256,
                sha512,
                ignore_checksums,
            } => {
                let args = FetchArgs {
                    url,
                    dir,
                    md5,
                    sha1,
                    sha256,
                    sha512,
                    ignore_checksums,
                };
                run_fetch(&cfg, cli.api_key.as_deref(), args).await?;
            }
            CliCommand::Checksum { path } => run_checksum(Path::new(&path)).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
