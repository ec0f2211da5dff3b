use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::credentials::ApiKey;
use crate::fetch::HttpOptions;

/// Environment variable consulted for the API key when none is passed explicitly.
pub const API_KEY_ENV: &str = "CDNGET_API_KEY";

/// HTTP transport settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    /// Hard limit for a whole transfer.
    pub timeout_secs: u64,
    pub max_redirections: u32,
    /// Overrides the default `cdnget/<version>` user agent.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 3600,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

impl HttpConfig {
    pub fn to_options(&self) -> HttpOptions {
        let mut opts = HttpOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            max_redirections: self.max_redirections,
            ..HttpOptions::default()
        };
        if let Some(ua) = &self.user_agent {
            opts.user_agent = ua.clone();
        }
        opts
    }
}

/// Global configuration loaded from `~/.config/cdnget/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct CdngetConfig {
    /// Base URL of the package metadata API.
    pub api_host: String,
    /// API key; `CDNGET_API_KEY` or `--api-key` take precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Where packages are downloaded (None = platform temp dir).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Keep downloads whose checksums still mismatch after the retry.
    #[serde(default)]
    pub ignore_checksums: bool,
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for CdngetConfig {
    fn default() -> Self {
        Self {
            api_host: "https://api.cloudsmith.io".to_string(),
            api_key: None,
            download_dir: None,
            ignore_checksums: false,
            http: None,
        }
    }
}

// Debug output ends up in the log file; the key is shown only as set/unset.
impl fmt::Debug for CdngetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CdngetConfig")
            .field("api_host", &self.api_host)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("download_dir", &self.download_dir)
            .field("ignore_checksums", &self.ignore_checksums)
            .field("http", &self.http)
            .finish()
    }
}

impl CdngetConfig {
    /// Download directory, defaulting to the platform temp dir.
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn http_options(&self) -> HttpOptions {
        self.http.clone().unwrap_or_default().to_options()
    }

    /// Resolves the API key: explicit value, then `CDNGET_API_KEY`, then config.
    pub fn api_key(&self, explicit: Option<&str>) -> Result<ApiKey> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        resolve_api_key(explicit, from_env.as_deref(), self.api_key.as_deref())
    }
}

fn resolve_api_key(
    explicit: Option<&str>,
    env: Option<&str>,
    configured: Option<&str>,
) -> Result<ApiKey> {
    [explicit, env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|k| !k.is_empty())
        .map(ApiKey::new)
        .with_context(|| {
            format!("no API key: pass --api-key, set {API_KEY_ENV}, or set api_key in config.toml")
        })
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cdnget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CdngetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CdngetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CdngetConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
