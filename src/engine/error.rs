use thiserror::Error;

use crate::corpus::StoreError;
use crate::session::Role;

#[derive(Debug, Error)]
/// Request-level failures of the engine.
pub enum CheckError {
    /// Nothing to check.
    #[error("no submissions provided")]
    NoSubmissions,

    /// The local corpus could not be read.
    #[error("corpus store error: {0}")]
    Store(#[from] StoreError),

    /// The blocking corpus read did not complete.
    #[error("corpus read task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The caller's role does not allow the operation.
    #[error("user {user} with role {role} may not {action}")]
    Forbidden {
        user: String,
        role: Role,
        action: &'static str,
    },
}

#[derive(Debug, Error)]
/// Why a single submission was not archived.
pub enum ArchiveError {
    /// Verdict was not Clean below the archival threshold, or the name was
    /// not part of the check.
    #[error("{name} is not eligible for archival")]
    NotEligible { name: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
