use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A candidate text returned by a remote search.
pub struct RemoteDocument {
    /// File name reported by the provider.
    pub name: String,
    /// Decoded text content.
    pub content: String,
}

impl RemoteDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Whether remote search can be used right now.
pub struct RemoteStatus {
    pub available: bool,
    pub message: String,
}

impl RemoteStatus {
    pub fn available(message: impl Into<String>) -> Self {
        Self {
            available: true,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            available: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CodeSearchResponse {
    #[serde(default)]
    pub items: Vec<CodeSearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CodeSearchItem {
    pub name: String,
    /// Contents API URL for the file.
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileContentResponse {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
