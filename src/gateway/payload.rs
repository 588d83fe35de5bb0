use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::corpus::{IngestOutcome, StoredText};
use crate::engine::{ArchiveOutcome, CheckOutcome, IngestReport, Rejection};
use crate::report::{ReportRow, ReportSummary};
use crate::submission::Submission;
use crate::verdict::Verdict;

#[derive(Debug, Clone, Deserialize)]
pub struct FileUpload {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub files: Vec<FileUpload>,

    /// Pasted code; ignored when blank.
    #[serde(default)]
    pub pasted: Option<String>,

    /// Also search GitHub for candidates.
    #[serde(default)]
    pub remote: bool,
}

impl CheckRequest {
    pub fn into_submissions(self) -> Vec<Submission> {
        let mut submissions: Vec<Submission> = self
            .files
            .into_iter()
            .map(|f| Submission::new(f.name, f.text))
            .collect();

        if let Some(pasted) = self.pasted
            && !pasted.trim().is_empty()
        {
            submissions.push(Submission::pasted(pasted));
        }

        submissions
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArchiveRequest {
    #[serde(flatten)]
    pub check: CheckRequest,

    /// Restrict archival to these submission names.
    #[serde(default)]
    pub selected: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesRequest {
    pub files: Vec<FileUpload>,
}

impl SourcesRequest {
    pub fn into_uploads(self) -> Vec<StoredText> {
        self.files
            .into_iter()
            .map(|f| StoredText::new(f.name, f.text))
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub request_id: Uuid,
    pub summary: ReportSummary,
    pub rows: Vec<ReportRow>,
    pub verdicts: Vec<Verdict>,
    pub rejected: Vec<Rejection>,
    pub archival_candidates: Vec<String>,
}

impl CheckResponse {
    pub fn from_outcome(request_id: Uuid, outcome: &CheckOutcome) -> Self {
        Self {
            request_id,
            summary: outcome.report.summary(),
            rows: outcome.report.rows().to_vec(),
            verdicts: outcome.verdicts.clone(),
            rejected: outcome.rejected.clone(),
            archival_candidates: outcome
                .archival_candidates()
                .into_iter()
                .map(|s| s.name().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArchivedFile {
    pub submission_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_as: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ArchiveOutcome> for ArchivedFile {
    fn from(outcome: &ArchiveOutcome) -> Self {
        Self {
            submission_name: outcome.submission_name.clone(),
            saved_as: outcome.saved_as().map(str::to_string),
            error: outcome.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArchiveResponse {
    pub request_id: Uuid,
    pub check: CheckResponse,
    pub archived: Vec<ArchivedFile>,
}

#[derive(Debug, Serialize)]
pub struct IngestedFile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<IngestOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&IngestReport> for IngestedFile {
    fn from(report: &IngestReport) -> Self {
        Self {
            name: report.name.clone(),
            outcome: report.result.as_ref().ok().copied(),
            error: report.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SourcesResponse {
    pub request_id: Uuid,
    pub results: Vec<IngestedFile>,
    pub corpus_size: usize,
}
