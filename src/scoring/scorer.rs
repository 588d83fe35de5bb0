use tracing::debug;

use crate::corpus::CorpusItem;

use super::tokenizer::TermCounts;
use super::types::Comparison;

/// Number of documents in the weighting space: the submission and one target.
const PAIR_DOCUMENTS: f64 = 2.0;

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
#[inline]
fn smoothed_idf(document_frequency: f64) -> f64 {
    ((1.0 + PAIR_DOCUMENTS) / (1.0 + document_frequency)).ln() + 1.0
}

/// TF-IDF cosine similarity of two texts, weighting over exactly this pair.
///
/// Returns a value in `[0, 1]`, and `0.0` whenever either text has no terms.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_of_counts(&TermCounts::from_text(a), &TermCounts::from_text(b))
}

/// Same as [`similarity`] over pre-tokenized documents.
pub fn similarity_of_counts(a: &TermCounts, b: &TermCounts) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let shared_idf = smoothed_idf(2.0);
    let unique_idf = smoothed_idf(1.0);

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    for (term, count_a) in a.iter() {
        let count_b = b.get(term);
        let idf = if count_b > 0 { shared_idf } else { unique_idf };
        let weight_a = f64::from(count_a) * idf;
        norm_a += weight_a * weight_a;
        if count_b > 0 {
            dot += weight_a * (f64::from(count_b) * idf);
        }
    }

    let mut norm_b = 0.0;
    for (term, count_b) in b.iter() {
        let idf = if a.get(term) > 0 { shared_idf } else { unique_idf };
        let weight_b = f64::from(count_b) * idf;
        norm_b += weight_b * weight_b;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (dot / denominator).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Scores submissions against corpus items and applies the flagging threshold.
pub struct SimilarityScorer {
    threshold: f64,
}

impl SimilarityScorer {
    /// Creates a scorer flagging at `threshold` (inclusive).
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn score(&self, submission_text: &str, candidate_text: &str) -> f64 {
        similarity(submission_text, candidate_text)
    }

    /// Compares one submission against every item, preserving corpus order.
    pub fn compare_all(
        &self,
        submission_name: &str,
        submission_text: &str,
        corpus: Vec<CorpusItem>,
    ) -> Vec<Comparison> {
        let submission_terms = TermCounts::from_text(submission_text);

        debug!(
            submission = submission_name,
            terms = submission_terms.len(),
            targets = corpus.len(),
            "Scoring submission"
        );

        corpus
            .into_iter()
            .map(|item| {
                let score =
                    similarity_of_counts(&submission_terms, &TermCounts::from_text(&item.text));
                Comparison::new(submission_name, item, score, self.threshold)
            })
            .collect()
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_FLAG_THRESHOLD)
    }
}
