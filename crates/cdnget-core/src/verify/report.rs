//! Per-algorithm comparison of expected and observed digests.

use crate::checksum::{Algorithm, DigestSet};
use std::fmt;

/// One algorithm whose observed digest differs from the published one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub algorithm: Algorithm,
    pub expected: String,
    pub observed: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checksum mismatch ({}): expected={}, got={}",
            self.algorithm, self.expected, self.observed
        )
    }
}

/// Every mismatching algorithm, in algorithm order. Empty means the file verified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MismatchReport {
    mismatches: Vec<Mismatch>,
}

impl MismatchReport {
    /// Compares every algorithm asserted in `expected` against `observed`
    /// (case-insensitive). Algorithms absent from `expected` are not checked;
    /// an asserted algorithm missing from `observed` counts as a mismatch.
    pub fn compare(expected: &DigestSet, observed: &DigestSet) -> Self {
        let mismatches = expected
            .iter()
            .filter_map(|(algorithm, want)| {
                let got = observed.get(algorithm).unwrap_or("");
                if want.eq_ignore_ascii_case(got) {
                    None
                } else {
                    Some(Mismatch {
                        algorithm,
                        expected: want.to_string(),
                        observed: got.to_string(),
                    })
                }
            })
            .collect();
        Self { mismatches }
    }

    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.mismatches.iter().map(|m| m.algorithm).collect()
    }
}

/// One line per mismatching algorithm, newline-joined.
impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.mismatches.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed() -> DigestSet {
        DigestSet::new()
            .with(Algorithm::Md5, "11")
            .with(Algorithm::Sha1, "22")
            .with(Algorithm::Sha256, "bbbb")
            .with(Algorithm::Sha512, "44")
    }

    #[test]
    fn all_match() {
        let expected = observed();
        assert!(MismatchReport::compare(&expected, &observed()).is_match());
    }

    #[test]
    fn only_mismatching_algorithms_reported() {
        let expected = DigestSet::new()
            .with(Algorithm::Md5, "11")
            .with(Algorithm::Sha256, "aaaa");
        let report = MismatchReport::compare(&expected, &observed());
        assert_eq!(report.algorithms(), vec![Algorithm::Sha256]);
        assert_eq!(
            report.to_string(),
            "Checksum mismatch (SHA256): expected=aaaa, got=bbbb"
        );
    }

    #[test]
    fn absent_expected_entries_are_not_checked() {
        let report = MismatchReport::compare(&DigestSet::new(), &observed());
        assert!(report.is_match());
    }

    #[test]
    fn comparison_is_case_insensitive() {
        // DigestSet lowercases on insert; compare still tolerates raw input.
        let expected = DigestSet::new().with(Algorithm::Sha256, "BBBB");
        assert!(MismatchReport::compare(&expected, &observed()).is_match());
    }

    #[test]
    fn multiple_lines_in_algorithm_order() {
        let expected = DigestSet::new()
            .with(Algorithm::Sha512, "ff")
            .with(Algorithm::Md5, "ee")
            .with(Algorithm::Sha1, "22");
        let report = MismatchReport::compare(&expected, &observed());
        assert_eq!(
            report.to_string(),
            "Checksum mismatch (MD5): expected=ee, got=11\n\
             Checksum mismatch (SHA512): expected=ff, got=44"
        );
    }
}
