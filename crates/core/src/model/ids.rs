use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Post.
///
/// The feed API hands ids out as opaque strings; we never mint them locally.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Creates a new `PostId` from the API-supplied value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostId({})", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_id_display() {
        let id = PostId::new("p-42");
        assert_eq!(id.to_string(), "p-42");
    }

    #[test]
    fn post_id_equality() {
        assert_eq!(PostId::from("a"), PostId::new("a"));
        assert_ne!(PostId::from("a"), PostId::new("b"));
    }
}
