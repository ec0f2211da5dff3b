//! Retry/decision state machine for one verification.
//!
//! `decide` is pure: given the attempt that just finished, its comparison and
//! the policy, it says what happens next. At most two fetches happen; the
//! second always busts the CDN cache.

use super::report::MismatchReport;
use super::VerifyPolicy;

/// Fetches allowed per verification (the first plus one cache-busting retry).
pub const MAX_ATTEMPTS: u32 = 2;

/// Position in the state machine: which fetch is (or was just) performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based attempt number.
    pub attempt: u32,
    pub bust_cache: bool,
}

impl Step {
    pub const fn first() -> Self {
        Self {
            attempt: 1,
            bust_cache: false,
        }
    }

    /// The cache-busting retry following this step.
    pub const fn retry(self) -> Self {
        Self {
            attempt: self.attempt + 1,
            bust_cache: true,
        }
    }
}

/// What to do after comparing one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Verified,
    /// Fetch again with the given step.
    Retry(Step),
    /// Out of attempts but the policy accepts the mismatch.
    AcceptMismatch,
    /// Out of attempts; report the mismatch.
    Fail,
}

pub fn decide(step: Step, report: &MismatchReport, policy: VerifyPolicy) -> Transition {
    if report.is_match() {
        return Transition::Verified;
    }
    if step.attempt < MAX_ATTEMPTS {
        return Transition::Retry(step.retry());
    }
    if policy.ignore_checksums {
        Transition::AcceptMismatch
    } else {
        Transition::Fail
    }
}
