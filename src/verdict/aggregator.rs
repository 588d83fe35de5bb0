use tracing::debug;

use crate::constants::ARCHIVAL_THRESHOLD;
use crate::scoring::Comparison;

use super::types::{Verdict, VerdictStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Fold state for one submission's comparisons.
///
/// Consumed by [`finish`](Self::finish); nothing reads the partial counts.
pub struct VerdictAccumulator {
    flagged: usize,
    unflagged: usize,
    max_similarity: f64,
}

impl VerdictAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds in one comparison outcome.
    #[inline]
    pub fn push(mut self, flagged: bool, similarity: f64) -> Self {
        if flagged {
            self.flagged += 1;
        } else {
            self.unflagged += 1;
        }
        if similarity > self.max_similarity {
            self.max_similarity = similarity;
        }
        self
    }

    /// Status implied by the counts so far.
    pub fn status(&self) -> VerdictStatus {
        match (self.flagged, self.unflagged) {
            (0, _) => VerdictStatus::Clean,
            (_, 0) => VerdictStatus::Flagged,
            _ => VerdictStatus::Partial,
        }
    }

    /// Finalizes into a [`Verdict`].
    pub fn finish(self, submission_name: impl Into<String>) -> Verdict {
        let status = self.status();
        let archival_eligible =
            status == VerdictStatus::Clean && self.max_similarity < ARCHIVAL_THRESHOLD;

        Verdict {
            submission_name: submission_name.into(),
            status,
            max_similarity: self.max_similarity,
            archival_eligible,
        }
    }
}

/// Rolls one submission's comparisons up into its verdict.
///
/// Order-independent: any permutation of `comparisons` yields the same verdict.
pub fn aggregate(submission_name: &str, comparisons: &[Comparison]) -> Verdict {
    let verdict = comparisons
        .iter()
        .fold(VerdictAccumulator::new(), |acc, c| {
            acc.push(c.is_flagged(), c.similarity())
        })
        .finish(submission_name);

    debug!(
        submission = submission_name,
        comparisons = comparisons.len(),
        status = %verdict.status,
        max_similarity = verdict.max_similarity,
        archival_eligible = verdict.archival_eligible,
        "Aggregated verdict"
    );

    verdict
}
