use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier of a question, e.g. `"psych_01"` or `"wiscar_skill_01"`.
///
/// Used as keys in `Responses`. Identifiers are prefixed with their section
/// (`psych_`, `tech_`, `wiscar_`), and scoring partitions responses by prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the identifier is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Check whether the identifier starts with the given prefix.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.id.starts_with(prefix)
    }

    /// Returns the remainder after the given prefix, if it matches.
    pub fn strip_prefix(&self, prefix: &str) -> Option<&str> {
        self.id.strip_prefix(prefix)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}
