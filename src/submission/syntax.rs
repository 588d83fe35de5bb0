//! Python syntax guardrail.
//!
//! Submissions must parse as a Python module. Parse failures are mapped to a
//! line number and the parser's message.

use rustpython_parser::{Mode, ParseError, parse};
use serde::Serialize;
use thiserror::Error;

/// Source path reported to the parser.
const SOURCE_PATH: &str = "<submission>";

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line}: {message}")]
/// Why a Python submission was rejected.
pub struct SyntaxError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

impl SyntaxError {
    fn from_parse_error(source: &str, error: &ParseError) -> Self {
        let offset = u32::from(error.offset) as usize;
        Self {
            line: line_at(source, offset),
            message: error.error.to_string(),
        }
    }
}

/// 1-based line containing byte `offset`; offsets past the end map to the
/// last line.
fn line_at(source: &str, offset: usize) -> usize {
    let end = offset.min(source.len());
    source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Parses `source` as a Python module.
///
/// Empty source is valid.
pub fn check_python(source: &str) -> Result<(), SyntaxError> {
    parse(source, Mode::Module, SOURCE_PATH)
        .map(|_| ())
        .map_err(|e| SyntaxError::from_parse_error(source, &e))
}
