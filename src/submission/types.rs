use serde::{Deserialize, Serialize};

use crate::constants::PASTED_SUBMISSION_NAME;

use super::syntax::{SyntaxError, check_python};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a submission's text is interpreted before scoring.
pub enum SubmissionKind {
    /// Python source; must pass the syntax guardrail.
    Python,
    /// Anything else; scored as-is.
    PlainText,
}

impl SubmissionKind {
    /// Python iff the file name ends in `.py`.
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(".py") {
            SubmissionKind::Python
        } else {
            SubmissionKind::PlainText
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One uploaded file or pasted snippet.
pub struct Submission {
    name: String,
    text: String,
    kind: SubmissionKind,
}

impl Submission {
    /// An uploaded file; the kind follows the file name.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        let kind = SubmissionKind::from_name(&name);
        Self {
            name,
            text: text.into(),
            kind,
        }
    }

    /// Pasted text, always treated as Python.
    pub fn pasted(text: impl Into<String>) -> Self {
        Self {
            name: PASTED_SUBMISSION_NAME.to_string(),
            text: text.into(),
            kind: SubmissionKind::Python,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SubmissionKind {
        self.kind
    }

    /// Runs the syntax guardrail. Plain text always passes.
    pub fn validate(&self) -> Result<(), SyntaxError> {
        match self.kind {
            SubmissionKind::Python => check_python(&self.text),
            SubmissionKind::PlainText => Ok(()),
        }
    }

    pub fn is_syntactically_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
