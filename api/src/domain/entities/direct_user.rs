//! Direct user domain entity
//!
//! A retail/direct customer identity record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a direct user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectUserId(pub String);

impl DirectUserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DirectUserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for DirectUserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DirectUserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for DirectUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A direct user. Only `name` is mutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectUser {
    pub id: DirectUserId,
    pub name: String,
}

impl DirectUser {
    /// Create a direct user with a freshly generated ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DirectUserId::new(),
            name: name.into(),
        }
    }
}
