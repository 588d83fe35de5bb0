//! Tabular similarity reports and CSV export.
//!
//! Summary counts are never stored; [`Report::summary`] folds the rows
//! through [`VerdictAccumulator`](crate::verdict::VerdictAccumulator) each
//! time it is asked.

pub mod builder;
pub mod export;
pub mod types;


pub use builder::ReportBuilder;
pub use export::{CSV_HEADER, format_percent, to_csv};
pub use types::{Report, ReportRow, ReportSummary, RowStatus};
