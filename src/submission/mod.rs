//! Submission intake.
//!
//! A [`Submission`] is an uploaded file or pasted snippet. Python submissions
//! pass through [`check_python`] before they are scored; a rejected submission
//! never produces comparisons.

pub mod syntax;
pub mod types;

#[cfg(test)]
mod tests;

pub use syntax::{SyntaxError, check_python};
pub use types::{Submission, SubmissionKind};
