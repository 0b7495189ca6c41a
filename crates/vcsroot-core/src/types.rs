//! Identity types for VCS roots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External identifier of a VCS root.
///
/// Build configurations reference roots by this id.
///
/// # Example
///
/// ```
/// use vcsroot_core::VcsRootId;
///
/// let id = VcsRootId::new("Project_MainRepo");
/// assert_eq!(id.as_str(), "Project_MainRepo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VcsRootId(String);

impl VcsRootId {
    /// Creates a new identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VcsRootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VcsRootId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VcsRootId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
