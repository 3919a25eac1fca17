//! Response envelopes used by the backend's list endpoints.

use serde::Deserialize;

use vaultdesk_domain::work_item::WorkItem;

/// `{"items": [...]}` from `/api/tasks` and `/api/approvals`.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsEnvelope {
    pub items: Vec<WorkItem>,
}

/// `{"lines": [...]}` from `/api/logs` and `/api/claude/logs`.
#[derive(Debug, Deserialize)]
pub(crate) struct LinesEnvelope {
    pub lines: Vec<String>,
}
