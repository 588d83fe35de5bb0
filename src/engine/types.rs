use std::time::Duration;

use serde::Serialize;

use crate::config::Config;
use crate::constants::{DEFAULT_FLAG_THRESHOLD, DEFAULT_MAX_KEYWORDS};
use crate::corpus::{IngestOutcome, StoreError};
use crate::report::Report;
use crate::submission::{Submission, SyntaxError};
use crate::verdict::Verdict;

use super::error::ArchiveError;

/// Default bound on one remote search.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq)]
/// Tunables for a [`PlagiarismChecker`](super::PlagiarismChecker).
pub struct CheckSettings {
    /// Flagging threshold as a fraction in `(0, 1]`.
    pub flag_threshold: f64,
    /// Keywords per remote query.
    pub max_keywords: usize,
    /// Bound on each remote search call.
    pub remote_timeout: Duration,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            flag_threshold: DEFAULT_FLAG_THRESHOLD,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

impl From<&Config> for CheckSettings {
    fn from(config: &Config) -> Self {
        Self {
            flag_threshold: config.flag_threshold,
            max_keywords: config.max_keywords,
            remote_timeout: config.remote_timeout,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Also compare against remote search results.
    pub use_remote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A submission that failed the syntax guardrail.
pub struct Rejection {
    pub submission_name: String,
    pub error: SyntaxError,
}

#[derive(Debug, Clone)]
/// Result of one check request.
pub struct CheckOutcome {
    pub report: Report,
    /// One per distinct accepted submission name, in first-seen order.
    pub verdicts: Vec<Verdict>,
    pub rejected: Vec<Rejection>,
    /// Accepted submissions, kept for archival.
    pub submissions: Vec<Submission>,
}

impl CheckOutcome {
    /// Accepted submissions whose name's verdict allows archival.
    pub fn archival_candidates(&self) -> Vec<&Submission> {
        self.submissions
            .iter()
            .filter(|s| self.is_archival_eligible(s.name()))
            .collect()
    }

    pub fn is_archival_eligible(&self, submission_name: &str) -> bool {
        self.verdict(submission_name)
            .is_some_and(|v| v.archival_eligible)
    }

    pub fn verdict(&self, submission_name: &str) -> Option<&Verdict> {
        self.verdicts
            .iter()
            .find(|v| v.submission_name == submission_name)
    }
}

#[derive(Debug)]
/// Per-submission archival result.
pub struct ArchiveOutcome {
    pub submission_name: String,
    /// Saved entry name, or why nothing was saved.
    pub result: Result<String, ArchiveError>,
}

impl ArchiveOutcome {
    pub fn saved_as(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }
}

#[derive(Debug)]
/// Per-file source upload result.
pub struct IngestReport {
    pub name: String,
    pub result: Result<IngestOutcome, StoreError>,
}
