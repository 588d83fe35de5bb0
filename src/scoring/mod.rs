//! Pairwise TF-IDF similarity.
//!
//! Each score treats the two compared texts as the entire document set, so
//! inverse document frequency only distinguishes terms shared by both texts
//! (`df = 2`) from terms unique to one (`df = 1`). Weights use the smoothed
//! form `ln(3 / (1 + df)) + 1` on raw counts; vectors are L2-normalized and
//! compared by cosine.
//!
//! Texts with no surviving tokens score `0.0` against everything, including
//! themselves.

pub mod scorer;
pub mod tokenizer;
pub mod types;


pub use scorer::{SimilarityScorer, similarity, similarity_of_counts};
pub use tokenizer::{TermCounts, tokenize};
pub use types::Comparison;
