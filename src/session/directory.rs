use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::error::SessionError;
use super::types::{RequestContext, Role};

#[derive(Debug, Deserialize)]
struct UsersFile {
    #[serde(default)]
    users: Vec<UserRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct UserRecord {
    username: String,
    password: String,
    role: Role,
}

#[derive(Debug, Clone, Default)]
/// Known users, loaded from `users.yml`.
///
/// Passwords are compared as stored.
pub struct UserDirectory {
    users: HashMap<String, UserRecord>,
}

impl UserDirectory {
    /// Reads and parses a users file.
    pub fn from_path(path: &Path) -> Result<Self, SessionError> {
        let content = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_yaml_str(&content)?;
        info!(path = %path.display(), users = directory.len(), "Loaded user directory");
        Ok(directory)
    }

    /// Parses `users: [{username, password, role}]`. Later duplicates win.
    pub fn from_yaml_str(content: &str) -> Result<Self, SessionError> {
        let file: UsersFile = serde_yaml::from_str(content)?;
        let users = file
            .users
            .into_iter()
            .map(|record| (record.username.clone(), record))
            .collect();
        Ok(Self { users })
    }

    /// Adds or replaces a user.
    pub fn with_user(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        let username = username.into();
        self.users.insert(
            username.clone(),
            UserRecord {
                username,
                password: password.into(),
                role,
            },
        );
        self
    }

    /// Returns a fresh [`RequestContext`] for valid credentials.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<RequestContext, SessionError> {
        match self.users.get(username) {
            Some(record) if record.password == password => {
                let ctx = RequestContext::new(record.username.as_str(), record.role);
                debug!(user = %ctx.user, role = %ctx.role, request_id = %ctx.request_id, "Authenticated");
                Ok(ctx)
            }
            _ => Err(SessionError::InvalidCredentials),
        }
    }

    pub fn role_of(&self, username: &str) -> Option<Role> {
        self.users.get(username).map(|record| record.role)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
