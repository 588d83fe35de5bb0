use serde::Serialize;

use crate::corpus::Origin;
use crate::verdict::{Verdict, VerdictAccumulator, VerdictStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Per-row status; a single comparison is never `Partial`.
pub enum RowStatus {
    Clean,
    Flagged,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Clean => "Clean",
            RowStatus::Flagged => "Flagged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One comparison, flattened for display and export.
pub struct ReportRow {
    pub submission_name: String,
    /// Display name (`GitHub: ` prefix for remote sources).
    pub source_name: String,
    pub origin: Origin,
    /// Unrounded score in `[0, 1]`.
    pub similarity: f64,
    /// `similarity * 100`, rounded to two decimals.
    ///
    /// Display only. `status` is decided on the unrounded `similarity`, so a
    /// row can show the threshold value (e.g. `80`) and still be Clean.
    pub similarity_percent: f64,
    pub status: RowStatus,
}

impl ReportRow {
    #[inline]
    pub fn is_flagged(&self) -> bool {
        self.status == RowStatus::Flagged
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Headline counts for a report.
pub struct ReportSummary {
    /// Local corpus entries at comparison time.
    pub corpus_size: usize,
    /// Distinct submissions in the roster.
    pub submissions: usize,
    pub flagged: usize,
    pub clean: usize,
    pub partial: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Flat comparison table plus the roster of submissions it covers.
pub struct Report {
    pub(crate) rows: Vec<ReportRow>,
    pub(crate) roster: Vec<String>,
    pub(crate) corpus_size: usize,
}

impl Report {
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Submission names in first-seen order, including those without rows.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Rows belonging to one submission, in table order.
    pub fn rows_for<'a>(&'a self, submission_name: &'a str) -> impl Iterator<Item = &'a ReportRow> {
        self.rows
            .iter()
            .filter(move |row| row.submission_name == submission_name)
    }

    /// Re-derives one verdict per roster entry from the table.
    pub fn verdicts(&self) -> Vec<Verdict> {
        self.roster
            .iter()
            .map(|name| {
                self.rows_for(name)
                    .fold(VerdictAccumulator::new(), |acc, row| {
                        acc.push(row.is_flagged(), row.similarity)
                    })
                    .finish(name.as_str())
            })
            .collect()
    }

    /// Counts recomputed from the table on every call.
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            corpus_size: self.corpus_size,
            submissions: self.roster.len(),
            ..Default::default()
        };

        for verdict in self.verdicts() {
            match verdict.status {
                VerdictStatus::Clean => summary.clean += 1,
                VerdictStatus::Flagged => summary.flagged += 1,
                VerdictStatus::Partial => summary.partial += 1,
            }
        }

        summary
    }
}
