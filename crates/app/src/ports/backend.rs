//! Backend port — the vault backend's JSON API as seen by the dashboard.
//!
//! Every method is a single attempt. Implementations collapse transport
//! failures, non-success statuses and malformed bodies into
//! [`DeskError::Backend`] naming the request path.

use std::future::Future;

use vaultdesk_domain::action::{ActionReply, CreateAppRequest, NewTask, VaultInfo};
use vaultdesk_domain::error::DeskError;
use vaultdesk_domain::summary::Summary;
use vaultdesk_domain::work_item::WorkItem;

/// Read and write access to the vault backend.
pub trait DeskBackend {
    /// `GET /api/summary`.
    fn summary(&self) -> impl Future<Output = Result<Summary, DeskError>> + Send;

    /// `GET /api/tasks` — open tasks.
    fn tasks(&self) -> impl Future<Output = Result<Vec<WorkItem>, DeskError>> + Send;

    /// `GET /api/approvals` — items pending approval.
    fn approvals(&self) -> impl Future<Output = Result<Vec<WorkItem>, DeskError>> + Send;

    /// `GET /api/logs` — orchestrator and watcher log tail, oldest first.
    fn work_log(&self) -> impl Future<Output = Result<Vec<String>, DeskError>> + Send;

    /// `GET /api/claude/logs` — Claude CLI log tail, oldest first.
    fn claude_log(&self) -> impl Future<Output = Result<Vec<String>, DeskError>> + Send;

    /// `GET /api/vault-path`.
    fn vault_path(&self) -> impl Future<Output = Result<VaultInfo, DeskError>> + Send;

    /// `POST /api/run-orchestrator`.
    fn run_orchestrator(&self) -> impl Future<Output = Result<ActionReply, DeskError>> + Send;

    /// `POST /api/new-task`.
    fn new_task(
        &self,
        task: &NewTask,
    ) -> impl Future<Output = Result<ActionReply, DeskError>> + Send;

    /// `POST /api/approve`.
    fn approve(&self, path: &str) -> impl Future<Output = Result<ActionReply, DeskError>> + Send;

    /// `POST /api/reject`.
    fn reject(&self, path: &str) -> impl Future<Output = Result<ActionReply, DeskError>> + Send;

    /// `POST /api/complete-task`.
    fn complete_task(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<ActionReply, DeskError>> + Send;

    /// `POST /api/claude/start`.
    fn claude_start(&self) -> impl Future<Output = Result<ActionReply, DeskError>> + Send;

    /// `POST /api/claude/stop`.
    fn claude_stop(&self) -> impl Future<Output = Result<ActionReply, DeskError>> + Send;

    /// `POST /api/new-claude-task`.
    fn new_claude_task(
        &self,
        request: &CreateAppRequest,
    ) -> impl Future<Output = Result<ActionReply, DeskError>> + Send;
}
