//! Voter identity value object

use serde::{Deserialize, Serialize};

/// Opaque, stable identity of a voting participant (Value Object)
///
/// The transport supplies this (a display name or account id); the core
/// never validates or authenticates it, it only keys ballots and orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoterId(String);

impl VoterId {
    /// Create a new voter identity
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        VoterId::new(s)
    }
}

impl From<String> for VoterId {
    fn from(s: String) -> Self {
        VoterId::new(s)
    }
}
