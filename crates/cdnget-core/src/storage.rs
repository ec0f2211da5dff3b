//! Destination file lifecycle.
//!
//! Bytes are streamed into `<final>.part` and renamed over the final path only
//! once the transfer has succeeded, so a failed attempt never replaces a
//! previous file. The temp file is removed when a `PartFile` is dropped
//! without being finalized.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `file.tgz` → `file.tgz.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Buffered writer for one download attempt.
pub struct PartFile {
    writer: Option<BufWriter<File>>,
    temp_path: PathBuf,
    final_path: PathBuf,
    written: u64,
    finalized: bool,
}

impl PartFile {
    /// Create (or truncate) the temp file for `final_path`.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            temp_path,
            final_path: final_path.to_path_buf(),
            written: 0,
            finalized: false,
        })
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    pub fn final_path(&self) -> &Path {
        &self.final_path
    }

    /// Bytes accepted so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush, sync and rename over the final path (replacing any existing file).
    /// Returns the number of bytes written. The handle is closed before the rename.
    pub fn finalize(mut self) -> io::Result<u64> {
        let writer = self
            .writer
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "part file already closed"))?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        drop(file);
        std::fs::rename(&self.temp_path, &self.final_path)?;
        self.finalized = true;
        Ok(self.written)
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "part file already closed"))
    }
}

impl Write for PartFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.writer()?.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        drop(self.writer.take());
        if self.finalized {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.temp_path) {
            tracing::debug!("could not remove {}: {}", self.temp_path.display(), e);
        }
    }
}
