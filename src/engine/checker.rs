use std::sync::Arc;

use chrono::NaiveDateTime;
use futures_util::future::join_all;
use tracing::{debug, info, instrument, warn};

use crate::corpus::{CorpusItem, CorpusStore, StoredText, assemble};
use crate::keywords::extract_keywords;
use crate::remote::{RemoteDocument, RemoteSearch, RemoteSearchError, RemoteStatus};
use crate::report::ReportBuilder;
use crate::scoring::{Comparison, SimilarityScorer};
use crate::session::RequestContext;
use crate::submission::Submission;

use super::error::{ArchiveError, CheckError};
use super::types::{
    ArchiveOutcome, CheckOptions, CheckOutcome, CheckSettings, IngestReport, Rejection,
};

/// Runs submissions through the full pipeline against a corpus store and an
/// optional remote search collaborator.
pub struct PlagiarismChecker<S, R> {
    store: Arc<S>,
    remote: Option<R>,
    settings: CheckSettings,
}

impl<S, R> std::fmt::Debug for PlagiarismChecker<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlagiarismChecker")
            .field("remote", &self.remote.is_some())
            .field("settings", &self.settings)
            .finish()
    }
}

impl<S, R> PlagiarismChecker<S, R>
where
    S: CorpusStore + 'static,
    R: RemoteSearch,
{
    pub fn new(store: S, remote: Option<R>, settings: CheckSettings) -> Self {
        Self {
            store: Arc::new(store),
            remote,
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn remote(&self) -> Option<&R> {
        self.remote.as_ref()
    }

    pub fn settings(&self) -> &CheckSettings {
        &self.settings
    }

    fn scorer(&self) -> SimilarityScorer {
        SimilarityScorer::new(self.settings.flag_threshold)
    }

    /// Checks submissions and builds the report.
    ///
    /// Invalid Python is rejected up front. The local corpus is read once on
    /// the blocking pool; remote candidates are fetched per submission
    /// concurrently and any failure there only removes remote comparisons.
    /// Verdicts are per distinct submission name, so same-named uploads share
    /// one verdict.
    #[instrument(skip_all, fields(user = %ctx.user, request_id = %ctx.request_id))]
    pub async fn check(
        &self,
        ctx: &RequestContext,
        submissions: Vec<Submission>,
        options: CheckOptions,
    ) -> Result<CheckOutcome, CheckError> {
        if submissions.is_empty() {
            return Err(CheckError::NoSubmissions);
        }

        let mut accepted = Vec::with_capacity(submissions.len());
        let mut rejected = Vec::new();
        for submission in submissions {
            match submission.validate() {
                Ok(()) => accepted.push(submission),
                Err(error) => {
                    info!(submission = submission.name(), %error, "Rejected submission");
                    rejected.push(Rejection {
                        submission_name: submission.name().to_string(),
                        error,
                    });
                }
            }
        }

        let store = Arc::clone(&self.store);
        let local = tokio::task::spawn_blocking(move || store.read_all()).await??;

        let remote_results: Vec<Option<Vec<RemoteDocument>>> = match (&self.remote, options.use_remote) {
            (Some(remote), true) => {
                join_all(
                    accepted
                        .iter()
                        .map(|s| self.fetch_remote(remote, s.text())),
                )
                .await
                .into_iter()
                .map(Some)
                .collect()
            }
            (None, true) => {
                warn!("Remote search requested but not configured");
                vec![None; accepted.len()]
            }
            (_, false) => vec![None; accepted.len()],
        };

        let mut builder = ReportBuilder::new(local.len());
        for (submission, remote) in accepted.iter().zip(remote_results) {
            let corpus = assemble(&local, remote.as_deref());
            let comparisons = self.compare(submission, corpus);
            debug!(submission = submission.name(), comparisons = comparisons.len(), "Compared submission");
            builder.add_submission(submission.name(), &comparisons);
        }

        let report = builder.build();
        let verdicts = report.verdicts();
        for verdict in &verdicts {
            info!(
                submission = %verdict.submission_name,
                status = %verdict.status,
                max_similarity = verdict.max_similarity,
                archival_eligible = verdict.archival_eligible,
                "Verdict"
            );
        }

        Ok(CheckOutcome {
            report,
            verdicts,
            rejected,
            submissions: accepted,
        })
    }

    /// Scores one submission against every corpus item.
    pub fn compare(&self, submission: &Submission, corpus: Vec<CorpusItem>) -> Vec<Comparison> {
        self.scorer()
            .compare_all(submission.name(), submission.text(), corpus)
    }

    /// Bounded remote search; every failure becomes an empty result.
    async fn fetch_remote(&self, remote: &R, text: &str) -> Vec<RemoteDocument> {
        let query = extract_keywords(text, self.settings.max_keywords);
        let bound = self.settings.remote_timeout;

        let result = match tokio::time::timeout(bound, remote.search(&query)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteSearchError::Timeout { after: bound }),
        };

        match result {
            Ok(documents) => {
                debug!(query = %query, documents = documents.len(), "Remote candidates");
                documents
            }
            Err(e) => {
                warn!(query = %query, error = %e, "Remote search failed; continuing without remote candidates");
                Vec::new()
            }
        }
    }

    /// Saves archival-eligible submissions into the local corpus.
    ///
    /// `selected` restricts the batch to those names; a selected name that is
    /// not eligible yields [`ArchiveError::NotEligible`]. Each submission
    /// succeeds or fails on its own.
    #[instrument(skip_all, fields(user = %ctx.user, request_id = %ctx.request_id))]
    pub fn archive(
        &self,
        ctx: &RequestContext,
        outcome: &CheckOutcome,
        selected: Option<&[String]>,
        timestamp: NaiveDateTime,
    ) -> Vec<ArchiveOutcome> {
        let mut results = Vec::new();

        if let Some(selected) = selected {
            for name in selected {
                if !outcome.is_archival_eligible(name) {
                    results.push(ArchiveOutcome {
                        submission_name: name.clone(),
                        result: Err(ArchiveError::NotEligible { name: name.clone() }),
                    });
                }
            }
        }

        for submission in outcome.archival_candidates() {
            if selected.is_some_and(|names| !names.iter().any(|n| n == submission.name())) {
                continue;
            }

            let result = self
                .store
                .archive(submission.name(), submission.text(), timestamp)
                .map_err(ArchiveError::from);

            match &result {
                Ok(saved) => info!(submission = submission.name(), saved_as = %saved, "Archived submission"),
                Err(e) => warn!(submission = submission.name(), error = %e, "Archival failed"),
            }

            results.push(ArchiveOutcome {
                submission_name: submission.name().to_string(),
                result,
            });
        }

        results
    }

    /// Adds reference texts to the local corpus (append if present, else
    /// create). Admin only.
    #[instrument(skip_all, fields(user = %ctx.user, request_id = %ctx.request_id))]
    pub fn ingest_sources(
        &self,
        ctx: &RequestContext,
        uploads: &[StoredText],
    ) -> Result<Vec<IngestReport>, CheckError> {
        if !ctx.role.can_ingest_sources() {
            return Err(CheckError::Forbidden {
                user: ctx.user.clone(),
                role: ctx.role,
                action: "upload source files",
            });
        }

        Ok(uploads
            .iter()
            .map(|upload| {
                let result = self.store.ingest(&upload.name, &upload.text);
                match &result {
                    Ok(outcome) => info!(name = %upload.name, ?outcome, "Ingested source"),
                    Err(e) => warn!(name = %upload.name, error = %e, "Source ingest failed"),
                }
                IngestReport {
                    name: upload.name.clone(),
                    result,
                }
            })
            .collect())
    }

    /// Remote collaborator health.
    pub async fn remote_status(&self) -> RemoteStatus {
        match &self.remote {
            Some(remote) => remote.status().await,
            None => RemoteStatus::unavailable("Remote search is disabled: no token configured."),
        }
    }
}
