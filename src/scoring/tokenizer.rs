use std::collections::BTreeMap;

/// Tokens shorter than this (in characters) are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Splits text into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric characters or `_` with at least
/// [`MIN_TOKEN_CHARS`] characters. Punctuation and whitespace are separators.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Raw term counts for one document, ordered by term.
pub struct TermCounts {
    counts: BTreeMap<String, u32>,
}

impl TermCounts {
    /// Tokenizes `text` and counts each term.
    pub fn from_text(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for token in tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `term` (zero if absent).
    #[inline]
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no term survived tokenization.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(term, count)` in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }
}
