//! Check orchestration.
//!
//! [`PlagiarismChecker`] wires the pipeline: syntax guardrail, local corpus
//! read, bounded remote retrieval, assembly, scoring, verdicts and the report.
//! It also owns archival and source ingestion, both of which go through the
//! [`CorpusStore`](crate::corpus::CorpusStore) seam.

pub mod checker;
pub mod error;
pub mod types;


pub use checker::PlagiarismChecker;
pub use error::{ArchiveError, CheckError};
pub use types::{
    ArchiveOutcome, CheckOptions, CheckOutcome, CheckSettings, DEFAULT_REMOTE_TIMEOUT,
    IngestReport, Rejection,
};
