//! Status labels — the small state flags shown next to each control.

use serde::{Deserialize, Serialize};

/// Local file-watcher flag.
///
/// Held only in memory and toggled by explicit start/stop actions. It is
/// never derived from, nor pushed to, the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatcherState {
    pub running: bool,
}

impl WatcherState {
    /// Label for the watcher status: `Running` or `Idle`.
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.running { "Running" } else { "Idle" }
    }

    /// Label for the local agent badge.
    #[must_use]
    pub fn agent_label(self) -> &'static str {
        if self.running {
            "Local Active"
        } else {
            "Local Ready"
        }
    }
}

/// Claude process status as last reported (by summary or by start/stop).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaudeStatus {
    #[default]
    Unknown,
    Running,
    Stopped,
}

impl ClaudeStatus {
    #[must_use]
    pub fn from_running(running: bool) -> Self {
        if running { Self::Running } else { Self::Stopped }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Running => "Running",
            Self::Stopped => "Stopped",
        }
    }
}

/// Orchestrator run status; `Running` only while a run request is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrchestratorStatus {
    #[default]
    Ready,
    Running,
}

impl OrchestratorStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Running => "Running",
        }
    }
}

/// Outcome message shown under the create-app form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub ok: bool,
}

impl StatusMessage {
    #[must_use]
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ok: true,
        }
    }

    #[must_use]
    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ok: false,
        }
    }
}
