//! Submission-level verdicts.
//!
//! A verdict is a fold over a submission's comparisons: flagged and unflagged
//! counts give the status, the running maximum similarity gates archival.
//! Archival uses [`ARCHIVAL_THRESHOLD`](crate::constants::ARCHIVAL_THRESHOLD),
//! which is independent of the flagging threshold.

pub mod aggregator;
pub mod types;


pub use aggregator::{VerdictAccumulator, aggregate};
pub use types::{Verdict, VerdictStatus};
