//! Simcheck library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`extract_keywords`] - Remote query derivation
//! - [`assemble`], [`CorpusItem`] - Comparison targets
//! - [`SimilarityScorer`], [`Comparison`] - Pairwise TF-IDF cosine
//! - [`aggregate`], [`VerdictAccumulator`], [`Verdict`] - Submission verdicts
//! - [`ReportBuilder`], [`Report`] - Tables, summaries and CSV
//!
//! ## Collaborators
//! - [`CorpusStore`], [`FsCorpusStore`] - Local reference corpus
//! - [`RemoteSearch`], [`GithubSearch`], [`CachedRemoteSearch`] - External search
//!
//! ## Service
//! - [`PlagiarismChecker`] - Orchestration, archival, source ingestion
//! - [`UserDirectory`], [`RequestContext`], [`Role`] - Per-request identity
//! - [`Config`] - Environment configuration
//! - [`gateway`] - HTTP routes
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod corpus;
pub mod engine;
pub mod gateway;
pub mod keywords;
pub mod remote;
pub mod report;
pub mod scoring;
pub mod session;
pub mod submission;
pub mod verdict;

pub use config::{Config, ConfigError};
pub use constants::{ARCHIVAL_THRESHOLD, DEFAULT_FLAG_THRESHOLD, DEFAULT_MAX_KEYWORDS};
#[cfg(any(test, feature = "mock"))]
pub use corpus::MemoryCorpusStore;
pub use corpus::{
    CorpusItem, CorpusStore, FsCorpusStore, IngestOutcome, Origin, StoreError, StoredText,
    assemble,
};
pub use engine::{
    ArchiveError, ArchiveOutcome, CheckError, CheckOptions, CheckOutcome, CheckSettings,
    PlagiarismChecker, Rejection,
};
pub use keywords::extract_keywords;
#[cfg(any(test, feature = "mock"))]
pub use remote::MockRemoteSearch;
pub use remote::{
    CachedRemoteSearch, GithubConfig, GithubSearch, RemoteDocument, RemoteSearch,
    RemoteSearchError, RemoteStatus,
};
pub use report::{Report, ReportBuilder, ReportRow, ReportSummary};
pub use scoring::{Comparison, SimilarityScorer, similarity};
pub use session::{RequestContext, Role, SessionError, UserDirectory};
pub use submission::{Submission, SubmissionKind, SyntaxError, check_python};
pub use verdict::{Verdict, VerdictAccumulator, VerdictStatus, aggregate};
