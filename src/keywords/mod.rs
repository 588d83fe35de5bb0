//! Query derivation for remote corpus retrieval.

use crate::constants::{FALLBACK_QUERY, KEYWORD_MIN_EXCLUSIVE_LEN};

/// Builds a search query from the first `max_keywords` whitespace-delimited
/// tokens longer than three characters, in order of appearance.
///
/// Returns [`FALLBACK_QUERY`] when nothing qualifies.
pub fn extract_keywords(text: &str, max_keywords: usize) -> String {
    let keywords: Vec<&str> = text
        .split_whitespace()
        .filter(|token| token.chars().count() > KEYWORD_MIN_EXCLUSIVE_LEN)
        .take(max_keywords)
        .collect();

    if keywords.is_empty() {
        FALLBACK_QUERY.to_string()
    } else {
        keywords.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_order_and_limit() {
        let text = "def compute_total(items):\n    return sum(items) for totals";
        assert_eq!(
            extract_keywords(text, 3),
            "compute_total(items): return sum(items)"
        );
    }

    #[test]
    fn test_skips_short_tokens() {
        assert_eq!(extract_keywords("a an the with from", 5), "with from");
    }

    #[test]
    fn test_length_is_measured_in_chars() {
        // three chars, six bytes
        assert_eq!(extract_keywords("äöü ßßßß", 5), "ßßßß");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(extract_keywords("alpha\t\tbeta\n\ngamma", 5), "alpha beta gamma");
    }

    #[test]
    fn test_fallback_when_nothing_qualifies() {
        assert_eq!(extract_keywords("", 5), FALLBACK_QUERY);
        assert_eq!(extract_keywords("x = 1 + 2", 5), FALLBACK_QUERY);
        assert_eq!(extract_keywords("plenty of keywords", 0), FALLBACK_QUERY);
    }
}
