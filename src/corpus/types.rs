use serde::{Deserialize, Serialize};

use crate::constants::REMOTE_SOURCE_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Where a comparison target came from.
pub enum Origin {
    /// Snapshot of the local reference store.
    Local,
    /// Retrieved from the remote search collaborator for this request only.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One comparison target.
pub struct CorpusItem {
    /// Source of the text.
    pub origin: Origin,
    /// Entry name in its source.
    pub source_name: String,
    /// Full text.
    #[serde(skip_serializing)]
    pub text: String,
}

impl CorpusItem {
    /// Creates a local item.
    pub fn local(source_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Local,
            source_name: source_name.into(),
            text: text.into(),
        }
    }

    /// Creates a remote item.
    pub fn remote(source_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Remote,
            source_name: source_name.into(),
            text: text.into(),
        }
    }

    /// Name shown in reports; remote items carry the provider prefix.
    pub fn display_name(&self) -> String {
        match self.origin {
            Origin::Local => self.source_name.clone(),
            Origin::Remote => format!("{}{}", REMOTE_SOURCE_PREFIX, self.source_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A named entry read from a [`CorpusStore`](super::CorpusStore).
pub struct StoredText {
    /// Entry name (file name for the filesystem store).
    pub name: String,
    /// Entry contents.
    pub text: String,
}

impl StoredText {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Result of ingesting an upload into the store.
pub enum IngestOutcome {
    /// No entry of that name existed.
    Created,
    /// Content was appended to an existing entry.
    Appended,
}
