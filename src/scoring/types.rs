use serde::Serialize;

use crate::corpus::CorpusItem;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Outcome of scoring one submission against one corpus item.
///
/// Fields are private so `flagged` always agrees with the threshold it was built with.
pub struct Comparison {
    submission_name: String,
    corpus_item: CorpusItem,
    similarity: f64,
    flagged: bool,
}

impl Comparison {
    /// Creates a comparison; `flagged` is `similarity >= threshold`.
    pub fn new(
        submission_name: impl Into<String>,
        corpus_item: CorpusItem,
        similarity: f64,
        threshold: f64,
    ) -> Self {
        let similarity = similarity.clamp(0.0, 1.0);
        Self {
            submission_name: submission_name.into(),
            corpus_item,
            similarity,
            flagged: similarity >= threshold,
        }
    }

    pub fn submission_name(&self) -> &str {
        &self.submission_name
    }

    pub fn corpus_item(&self) -> &CorpusItem {
        &self.corpus_item
    }

    /// Similarity in `[0, 1]`.
    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }
}
