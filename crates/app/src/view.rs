//! Declarative render — plain dashboard state in, a UI tree out.
//!
//! [`render`] is a pure function: the same [`DashboardState`] always yields
//! an equal [`DashboardView`]. Every list is rebuilt from scratch, so
//! rendering twice never accumulates rows. Adapters turn the tree into
//! markup with escaping of their own; nothing here builds markup strings.

use serde::Serialize;

use vaultdesk_domain::activity::ActivityLog;
use vaultdesk_domain::snapshot::{Counts, Snapshot};
use vaultdesk_domain::status::{OrchestratorStatus, StatusMessage, WatcherState};
use vaultdesk_domain::summary::Summary;
use vaultdesk_domain::time::{NO_CLOCK, clock_label};
use vaultdesk_domain::work_item::WorkItem;

pub const NO_TASKS: &str = "No open tasks.";
pub const NO_APPROVALS: &str = "No approvals pending.";
pub const NO_WORK_LOG: &str = "[--:--] No logs yet.";
pub const NO_CLAUDE_LOG: &str = "[--:--] No Claude logs yet.";

/// Everything the dashboard view is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub snapshot: Snapshot,
    pub watcher: WatcherState,
    pub orchestrator: OrchestratorStatus,
    pub activity: ActivityLog,
    pub app_status: Option<StatusMessage>,
}

/// The complete rendered dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub metrics: Counts,
    pub last_sync: String,
    pub watcher: &'static str,
    pub agent: &'static str,
    pub orchestrator: &'static str,
    pub claude: &'static str,
    pub app_status: Option<StatusMessage>,
    pub tasks: ListPanel,
    pub approvals: ListPanel,
    pub work_log: LogPanel,
    pub claude_log: LogPanel,
    /// The last summary body as the backend reported it.
    pub backend_summary: Option<Summary>,
}

/// A list of work items, or a single placeholder when there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPanel {
    pub rows: Vec<ItemRow>,
    pub placeholder: &'static str,
}

impl ListPanel {
    fn build(items: &[WorkItem], placeholder: &'static str) -> Self {
        Self {
            rows: items.iter().map(ItemRow::from).collect(),
            placeholder,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One work item as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub path: String,
    pub title: String,
    pub kind: String,
}

impl From<&WorkItem> for ItemRow {
    fn from(item: &WorkItem) -> Self {
        Self {
            path: item.path.clone(),
            title: item.label().to_string(),
            kind: item.kind.clone(),
        }
    }
}

/// Log lines, newest first, or a single placeholder when there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogPanel {
    pub lines: Vec<String>,
    pub placeholder: &'static str,
}

impl LogPanel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Render the whole dashboard from its state.
#[must_use]
pub fn render(state: &DashboardState) -> DashboardView {
    let snapshot = &state.snapshot;

    DashboardView {
        metrics: snapshot.counts,
        last_sync: snapshot
            .last_sync
            .map_or_else(|| NO_CLOCK.to_string(), clock_label),
        watcher: state.watcher.label(),
        agent: state.watcher.agent_label(),
        orchestrator: state.orchestrator.label(),
        claude: snapshot.claude.label(),
        app_status: state.app_status.clone(),
        tasks: ListPanel::build(&snapshot.tasks, NO_TASKS),
        approvals: ListPanel::build(&snapshot.approvals, NO_APPROVALS),
        work_log: work_log_panel(&state.activity, &snapshot.work_log),
        claude_log: LogPanel {
            lines: snapshot.claude_log.iter().rev().cloned().collect(),
            placeholder: NO_CLAUDE_LOG,
        },
        backend_summary: snapshot.summary.clone(),
    }
}

/// Local activity first (already newest first), then backend lines reversed.
fn work_log_panel(activity: &ActivityLog, backend: &[String]) -> LogPanel {
    let lines = activity
        .iter()
        .map(str::to_string)
        .chain(backend.iter().rev().cloned())
        .collect();
    LogPanel {
        lines,
        placeholder: NO_WORK_LOG,
    }
}
