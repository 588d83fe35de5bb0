use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Submission-level rollup of comparison statuses.
pub enum VerdictStatus {
    /// No comparison was flagged (including the zero-comparison case).
    Clean,
    /// Every comparison was flagged.
    Flagged,
    /// Some, but not all, comparisons were flagged.
    Partial,
}

impl VerdictStatus {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Clean => "Clean",
            VerdictStatus::Flagged => "Flagged",
            VerdictStatus::Partial => "Partial",
        }
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Final decision for one submission.
pub struct Verdict {
    pub submission_name: String,
    pub status: VerdictStatus,
    /// Highest similarity seen; `0.0` with no comparisons.
    pub max_similarity: f64,
    /// Clean and strictly below the archival threshold.
    pub archival_eligible: bool,
}
