//! Single-pass fan-out over the four hash states.

use super::{Algorithm, DigestSet};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Accumulates MD5, SHA-1, SHA-256 and SHA-512 over the same bytes.
#[derive(Clone, Default)]
pub struct MultiHasher {
    md5: Md5,
    sha1: Sha1,
    sha256: Sha256,
    sha512: Sha512,
}

impl MultiHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) {
        self.md5.update(data);
        self.sha1.update(data);
        self.sha256.update(data);
        self.sha512.update(data);
    }

    /// Consumes the hasher and returns all four digests as lowercase hex.
    pub fn finalize(self) -> DigestSet {
        DigestSet::new()
            .with(Algorithm::Md5, hex::encode(self.md5.finalize()))
            .with(Algorithm::Sha1, hex::encode(self.sha1.finalize()))
            .with(Algorithm::Sha256, hex::encode(self.sha256.finalize()))
            .with(Algorithm::Sha512, hex::encode(self.sha512.finalize()))
    }
}

/// Reads `reader` to the end once and returns every digest.
pub fn compute_reader<R: Read>(mut reader: R) -> io::Result<DigestSet> {
    let mut hasher = MultiHasher::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize())
}

/// Computes every digest of the file at `path`. The file is closed before returning.
pub fn compute_path(path: &Path) -> io::Result<DigestSet> {
    let f = File::open(path)?;
    compute_reader(f)
}
