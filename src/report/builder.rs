use tracing::debug;

use crate::constants::fraction_to_percent;
use crate::scoring::Comparison;

use super::types::{Report, ReportRow, RowStatus};

#[derive(Debug, Clone, Default)]
/// Accumulates submissions' comparisons into a [`Report`].
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new(corpus_size: usize) -> Self {
        Self {
            report: Report {
                corpus_size,
                ..Default::default()
            },
        }
    }

    /// Appends a submission's rows; the name joins the roster even when
    /// `comparisons` is empty.
    pub fn add_submission(&mut self, submission_name: &str, comparisons: &[Comparison]) -> &mut Self {
        if !self.report.roster.iter().any(|name| name == submission_name) {
            self.report.roster.push(submission_name.to_string());
        }

        self.report.rows.extend(comparisons.iter().map(|c| ReportRow {
            submission_name: c.submission_name().to_string(),
            source_name: c.corpus_item().display_name(),
            origin: c.corpus_item().origin,
            similarity: c.similarity(),
            similarity_percent: fraction_to_percent(c.similarity()),
            status: if c.is_flagged() {
                RowStatus::Flagged
            } else {
                RowStatus::Clean
            },
        }));
        self
    }

    pub fn build(self) -> Report {
        debug!(
            submissions = self.report.roster.len(),
            rows = self.report.rows.len(),
            corpus_size = self.report.corpus_size,
            "Built report"
        );
        self.report
    }
}
