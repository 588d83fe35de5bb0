use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors returned by corpus store operations.
pub enum StoreError {
    /// IO error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry name is empty, a path, or otherwise unusable as a file name.
    #[error("invalid entry name: {name:?}")]
    InvalidName {
        /// Rejected name.
        name: String,
    },

    /// Path exists but is not a regular file.
    #[error("entry is not a file: {path}")]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// Target name is already taken and overwriting is not allowed.
    #[error("entry already exists: {name}")]
    AlreadyExists {
        /// Name that collided.
        name: String,
    },

    /// Store root is missing and could not be created.
    #[error("corpus store unavailable: {path}")]
    Unavailable {
        /// Root path.
        path: PathBuf,
    },

    /// Simulated or backend-specific write failure.
    #[error("write failed for {name}: {reason}")]
    WriteFailed {
        /// Entry name.
        name: String,
        /// Reason.
        reason: String,
    },
}

/// Convenience result type for corpus store operations.
pub type StoreResult<T> = Result<T, StoreError>;
