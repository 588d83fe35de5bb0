//! Comparison targets: the local reference store and corpus assembly.
//!
//! - [`CorpusStore`] is the narrow I/O seam; [`FsCorpusStore`] keeps one file per entry.
//! - [`assemble`] merges local entries and remote documents into [`CorpusItem`]s.

pub mod assembler;
pub mod error;
#[cfg(any(test, feature = "mock"))]
/// In-memory store (enabled with `mock` feature).
pub mod mock;
pub mod store;
pub mod types;


pub use assembler::assemble;
pub use error::{StoreError, StoreResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MemoryCorpusStore;
pub use store::{CorpusStore, FsCorpusStore, timestamped_name, validate_entry_name};
pub use types::{CorpusItem, IngestOutcome, Origin, StoredText};
