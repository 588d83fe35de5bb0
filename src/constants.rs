//! Cross-cutting, shared constants.
//!
//! Thresholds are fractions in `[0, 1]`. Configuration surfaces them as
//! percentages; convert at the boundary with [`percent_to_fraction`].

/// Default similarity at or above which a comparison is flagged.
pub const DEFAULT_FLAG_THRESHOLD: f64 = 0.80;

/// Maximum similarity (exclusive) a clean submission may reach and still be archived.
///
/// Deliberately distinct from [`DEFAULT_FLAG_THRESHOLD`]: flag aggressively,
/// archive conservatively.
pub const ARCHIVAL_THRESHOLD: f64 = 0.50;

/// Default number of keywords used to build a remote search query.
pub const DEFAULT_MAX_KEYWORDS: usize = 5;

/// Tokens must be longer than this (in characters) to become keywords.
pub const KEYWORD_MIN_EXCLUSIVE_LEN: usize = 3;

/// Query used when no token qualifies as a keyword.
pub const FALLBACK_QUERY: &str = "python";

/// Name given to pasted (non-file) submissions.
pub const PASTED_SUBMISSION_NAME: &str = "Pasted Code";

/// Prefix applied to remote corpus items in reports.
pub const REMOTE_SOURCE_PREFIX: &str = "GitHub: ";

/// Timestamp suffix format used when archiving under a colliding name.
pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name offered for CSV report downloads.
pub const REPORT_CSV_FILENAME: &str = "plagiarism_report.csv";

/// Converts a percentage (`80.0`) into a fraction (`0.80`).
#[inline]
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// Converts a fraction into a percentage rounded to two decimal places.
#[inline]
pub fn fraction_to_percent(fraction: f64) -> f64 {
    (fraction * 100.0 * 100.0).round() / 100.0
}
