//! tracing setup for the cdnget binary.
//!
//! Events go to an append-only file in the XDG state directory so that
//! stdout stays clean for JSON output. `RUST_LOG` overrides the filter.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,cdnget=debug,cdnget_core=debug";

/// `$XDG_STATE_HOME/cdnget/cdnget.log`.
pub fn log_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("cdnget")?;
    Ok(dirs.get_state_home().join("cdnget").join("cdnget.log"))
}

/// Per-event handle on the log file; stderr if the handle could not be duplicated.
enum LogWriter {
    File(File),
    Stderr(io::Stderr),
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr(e) => e.flush(),
        }
    }
}

struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => LogWriter::File(f),
            Err(_) => LogWriter::Stderr(io::stderr()),
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the file subscriber. Errors leave no subscriber installed, so the
/// caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(LogFile(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {}", e))?;

    tracing::debug!(log = %path.display(), "cdnget {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// Install a stderr-only subscriber; a no-op if one is already set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
