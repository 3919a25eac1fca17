//! Work item — a task or approval file listed by the backend.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Kind assigned to items the backend did not label.
pub const DEFAULT_KIND: &str = "task";

/// One entry of the task list or the approval list.
///
/// `path` is the vault-relative file path and doubles as the item's identity
/// for approve / reject / complete actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

impl WorkItem {
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            kind: kind.into(),
        }
    }

    /// Title to display, falling back to the path for untitled items.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.path
        } else {
            &self.title
        }
    }
}

/// Validate an item path received from a form before it is sent anywhere.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyPath`] when the trimmed path is empty.
pub fn require_path(path: &str) -> Result<&str, ValidationError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    Ok(trimmed)
}
