use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors from the user directory and role checks.
pub enum SessionError {
    /// Username unknown or password wrong.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Role string is neither `Admin` nor `Jury`.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    /// Users file could not be read.
    #[error("failed to read users file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Users file is not valid YAML for the expected shape.
    #[error("invalid users file: {0}")]
    Parse(#[from] serde_yaml::Error),
}
