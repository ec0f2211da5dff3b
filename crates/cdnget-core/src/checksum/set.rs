//! Algorithm → hex digest mapping with optional entries.

use super::Algorithm;
use std::collections::BTreeMap;

/// Digests keyed by algorithm. An absent entry means "not asserted".
///
/// Values are stored lowercase; empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestSet {
    digests: BTreeMap<Algorithm, String>,
}

impl DigestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `algorithm` set to `hex`. Blank input removes the entry.
    pub fn with(mut self, algorithm: Algorithm, hex: impl AsRef<str>) -> Self {
        let value = hex.as_ref().trim();
        if value.is_empty() {
            self.digests.remove(&algorithm);
        } else {
            self.digests.insert(algorithm, value.to_ascii_lowercase());
        }
        self
    }

    /// Like `with` but skips `None`.
    pub fn with_opt(self, algorithm: Algorithm, hex: Option<&str>) -> Self {
        match hex {
            Some(h) => self.with(algorithm, h),
            None => self,
        }
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&str> {
        self.digests.get(&algorithm).map(String::as_str)
    }

    /// True when no algorithm is asserted.
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Present entries in algorithm order.
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &str)> {
        self.digests.iter().map(|(a, h)| (*a, h.as_str()))
    }
}
