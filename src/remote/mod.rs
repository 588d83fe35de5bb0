//! External code search.
//!
//! - [`RemoteSearch`] is the collaborator seam; [`GithubSearch`] talks to GitHub code search.
//! - [`CachedRemoteSearch`] owns the query → results cache with an explicit TTL.
//!
//! Callers bound each search and treat any error as "no remote candidates";
//! see [`crate::engine`].

pub mod cache;
pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
/// Scripted remote search (enabled with `mock` feature).
pub mod mock;
pub mod model;


pub use cache::CachedRemoteSearch;
pub use client::{GithubConfig, GithubSearch, RemoteSearch, decode_content};
pub use error::RemoteSearchError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockRemoteSearch;
pub use model::{RemoteDocument, RemoteStatus};
