//! Checksum computation for downloaded files.
//!
//! A single read pass feeds every chunk through MD5, SHA-1, SHA-256 and
//! SHA-512 at once, so verifying a file costs one read regardless of how many
//! algorithms the publisher asserts.

mod algorithm;
mod engine;
mod set;

pub use algorithm::Algorithm;
pub use engine::{compute_path, compute_reader, MultiHasher};
pub use set::DigestSet;

#[cfg(test)]
mod tests {
    use super::*;
    use md5::Md5;
    use sha1::Sha1;
    use sha2::{Digest, Sha256, Sha512};
    use std::io::Write;

    fn independent(data: &[u8]) -> DigestSet {
        DigestSet::new()
            .with(Algorithm::Md5, hex::encode(Md5::digest(data)))
            .with(Algorithm::Sha1, hex::encode(Sha1::digest(data)))
            .with(Algorithm::Sha256, hex::encode(Sha256::digest(data)))
            .with(Algorithm::Sha512, hex::encode(Sha512::digest(data)))
    }

    #[test]
    fn empty_input_known_digests() {
        let set = compute_reader(&b""[..]).unwrap();
        assert_eq!(set.get(Algorithm::Md5), Some("d41d8cd98f00b204e9800998ecf8427e"));
        assert_eq!(
            set.get(Algorithm::Sha1),
            Some("da39a3ee5e6b4b0d3255bfef95601890afd80709")
        );
        assert_eq!(
            set.get(Algorithm::Sha256),
            Some("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
        assert_eq!(
            set.get(Algorithm::Sha512),
            Some(
                "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                 47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
            )
        );
    }

    #[test]
    fn known_content_sha256() {
        let set = compute_reader(&b"hello\n"[..]).unwrap();
        assert_eq!(
            set.get(Algorithm::Sha256),
            Some("5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03")
        );
        assert_eq!(set.get(Algorithm::Md5), Some("b1946ac92492d2347c6235b4d2611184"));
    }

    #[test]
    fn fan_out_matches_independent_hashes_across_chunk_boundaries() {
        // Larger than the read buffer so several chunks are fed.
        let data: Vec<u8> = (0u8..=250).cycle().take(200 * 1024 + 17).collect();
        let set = compute_reader(&data[..]).unwrap();
        assert_eq!(set, independent(&data));
    }

    #[test]
    fn compute_path_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"package bytes").unwrap();
        f.flush().unwrap();
        let set = compute_path(f.path()).unwrap();
        assert_eq!(set, independent(b"package bytes"));
    }

    #[test]
    fn compute_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = compute_path(&dir.path().join("absent.bin")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
