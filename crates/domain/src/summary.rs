//! Summary — the backend's own view of its state.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/summary`.
///
/// Only `claude_running` drives the rendered page. The whole body is passed
/// through to the JSON view as `backend_summary`; the page derives its own
/// counts from the lists and its own sync label from the local clock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub claude_running: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_open: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approvals_open: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<String>,
}

impl Summary {
    #[must_use]
    pub fn with_claude_running(claude_running: bool) -> Self {
        Self {
            claude_running,
            ..Self::default()
        }
    }
}
