//! Users, roles and per-request identity.
//!
//! Nothing here is process-global: handlers authenticate each request into a
//! [`RequestContext`] and pass it to the engine explicitly.

pub mod directory;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use directory::UserDirectory;
pub use error::SessionError;
pub use types::{RequestContext, Role};
