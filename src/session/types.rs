use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// What an authenticated user may do.
pub enum Role {
    Admin,
    Jury,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Jury => "Jury",
        }
    }

    /// Only admins extend the reference corpus.
    pub fn can_ingest_sources(&self) -> bool {
        match self {
            Role::Admin => true,
            Role::Jury => false,
        }
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Jury" => Ok(Role::Jury),
            other => Err(SessionError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Caller identity for one request.
pub struct RequestContext {
    pub user: String,
    pub role: Role,
    pub request_id: Uuid,
}

impl RequestContext {
    /// Creates a context with a fresh request id.
    pub fn new(user: impl Into<String>, role: Role) -> Self {
        Self {
            user: user.into(),
            role,
            request_id: Uuid::new_v4(),
        }
    }
}
