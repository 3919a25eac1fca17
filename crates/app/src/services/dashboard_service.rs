//! Dashboard service — the controller behind the poll-render loop.
//!
//! Owns the backend handle and everything the view is rendered from. A
//! refresh issues the five panel fetches concurrently and folds whatever
//! succeeded into the snapshot; failures are contained per request and
//! surface only as `API error: <path>` lines in the work log. User actions
//! are single-attempt POSTs followed by an immediate refresh.
//!
//! Refresh cycles are serialized: a second caller waits for the cycle in
//! flight, so writes to a section always land in cycle order.

use std::sync::{Mutex, MutexGuard, PoisonError};

use vaultdesk_domain::action::{ActionReply, CreateAppRequest, NewTask};
use vaultdesk_domain::error::DeskError;
use vaultdesk_domain::snapshot::{PollResult, Section};
use vaultdesk_domain::status::{ClaudeStatus, OrchestratorStatus, StatusMessage};
use vaultdesk_domain::time::{Timestamp, now};
use vaultdesk_domain::work_item::require_path;

use crate::ports::DeskBackend;
use crate::view::{DashboardState, DashboardView, render};

const CREATE_APP_FAILED: &str = "Create app failed.";

/// What one refresh cycle achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub started_at: Timestamp,
    /// Sections replaced by fresh data.
    pub updated: Vec<Section>,
    /// Backend paths whose fetch failed.
    pub failed: Vec<String>,
}

impl RefreshReport {
    /// Whether every section was refreshed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Application service that drives the dashboard.
pub struct DashboardService<B> {
    backend: B,
    state: Mutex<DashboardState>,
    refresh_gate: tokio::sync::Mutex<()>,
}

impl<B: DeskBackend + Sync> DashboardService<B> {
    /// Create a new service backed by the given backend, with an empty snapshot.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(DashboardState::default()),
            refresh_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// The backend this service talks to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render the current state.
    pub fn view(&self) -> DashboardView {
        render(&self.lock())
    }

    /// Copy of the current state.
    pub fn state(&self) -> DashboardState {
        self.lock().clone()
    }

    /// Run one refresh cycle.
    ///
    /// Never fails: each failed fetch leaves its section untouched and is
    /// reported in the returned [`RefreshReport`] and in the work log.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshReport {
        let _gate = self.refresh_gate.lock().await;
        let started_at = now();

        let (summary, tasks, approvals, work_log, claude_log) = tokio::join!(
            self.backend.summary(),
            self.backend.tasks(),
            self.backend.approvals(),
            self.backend.work_log(),
            self.backend.claude_log(),
        );

        let mut failed = Vec::new();
        let poll = PollResult {
            started_at,
            summary: settle(summary, &mut failed),
            tasks: settle(tasks, &mut failed),
            approvals: settle(approvals, &mut failed),
            work_log: settle(work_log, &mut failed),
            claude_log: settle(claude_log, &mut failed),
        };

        let updated = {
            let mut state = self.lock();
            let updated = state.snapshot.apply(poll);
            if updated.contains(&Section::WorkLog) {
                state.activity.rebuilt(started_at);
            }
            let at = now();
            for path in &failed {
                state.activity.record(at, format!("API error: {path}"));
            }
            updated
        };

        tracing::debug!(
            updated = updated.len(),
            failed = failed.len(),
            "refresh cycle complete"
        );

        RefreshReport {
            started_at,
            updated,
            failed,
        }
    }

    /// Mark the local watchers as running.
    #[tracing::instrument(skip(self))]
    pub fn start_watchers(&self) {
        self.set_watchers(true, "Watchers started.");
    }

    /// Mark the local watchers as stopped.
    #[tracing::instrument(skip(self))]
    pub fn stop_watchers(&self) {
        self.set_watchers(false, "Watchers stopped.");
    }

    /// Ask the backend to run the orchestrator once, then refresh.
    ///
    /// The orchestrator label reads `Running` only while the request is in
    /// flight, even if the caller stops polling this future.
    ///
    /// # Errors
    ///
    /// Returns the backend error after it has been logged to the work log.
    #[tracing::instrument(skip(self))]
    pub async fn run_orchestrator(&self) -> Result<(), DeskError> {
        let result = {
            let _running = OrchestratorRun::begin(&self.state);
            self.backend.run_orchestrator().await
        };

        {
            let at = now();
            let mut state = self.lock();
            if let Ok(reply) = &result {
                tracing::info!(planned = ?reply.planned, "orchestrator executed");
                state.activity.record(at, "Orchestrator executed.");
            }
            state.snapshot.touch_sync(at);
        }
        self.finish(result).await
    }

    /// Queue the canned draft-reply task, then refresh.
    ///
    /// # Errors
    ///
    /// Returns a validation or backend error; backend errors are also logged.
    pub async fn queue_new_task(&self) -> Result<(), DeskError> {
        self.queue_task(NewTask::draft_reply()).await
    }

    /// Queue `task`, then refresh.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`] without contacting the backend when
    /// the title is blank, or the logged backend error.
    #[tracing::instrument(skip(self, task), fields(title = %task.title))]
    pub async fn queue_task(&self, task: NewTask) -> Result<(), DeskError> {
        task.validate()?;
        let result = self.backend.new_task(&task).await;
        if result.is_ok() {
            self.log("New task queued.");
        }
        self.finish(result).await
    }

    /// Approve the pending item at `path`, then refresh.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`] for a blank path (nothing is sent),
    /// or the logged backend error.
    #[tracing::instrument(skip(self))]
    pub async fn approve(&self, path: &str) -> Result<(), DeskError> {
        let path = require_path(path)?;
        let result = self.backend.approve(path).await;
        if result.is_ok() {
            self.log(format!("Approved: {path}"));
        }
        self.finish(result).await
    }

    /// Reject the pending item at `path`, then refresh.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`] for a blank path (nothing is sent),
    /// or the logged backend error.
    #[tracing::instrument(skip(self))]
    pub async fn reject(&self, path: &str) -> Result<(), DeskError> {
        let path = require_path(path)?;
        let result = self.backend.reject(path).await;
        if result.is_ok() {
            self.log(format!("Rejected: {path}"));
        }
        self.finish(result).await
    }

    /// Mark the open task at `path` as done, then refresh.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`] for a blank path (nothing is sent),
    /// or the logged backend error.
    #[tracing::instrument(skip(self))]
    pub async fn complete_task(&self, path: &str) -> Result<(), DeskError> {
        let path = require_path(path)?;
        let result = self.backend.complete_task(path).await;
        if result.is_ok() {
            self.log(format!("Completed: {path}"));
        }
        self.finish(result).await
    }

    /// Look up the vault location and write it to the work log.
    ///
    /// # Errors
    ///
    /// Returns the logged backend error.
    #[tracing::instrument(skip(self))]
    pub async fn reveal_vault(&self) -> Result<(), DeskError> {
        match self.backend.vault_path().await {
            Ok(info) => {
                if let Some(vault) = info.vault {
                    self.log(format!("Vault path: {vault}"));
                }
                Ok(())
            }
            Err(err) => {
                self.record_failure(&err);
                Err(err)
            }
        }
    }

    /// Start the Claude process; the label flips only when the backend says `ok`.
    ///
    /// # Errors
    ///
    /// Returns the logged backend error. A reply without `ok` is not an
    /// error; it is reported as `Claude start failed.`.
    #[tracing::instrument(skip(self))]
    pub async fn start_claude(&self) -> Result<(), DeskError> {
        let result = self.backend.claude_start().await;
        self.settle_claude(&result, ClaudeStatus::Running, "Claude started.", "Claude start failed.");
        self.finish(result).await
    }

    /// Stop the Claude process; the label flips only when the backend says `ok`.
    ///
    /// # Errors
    ///
    /// Returns the logged backend error. A reply without `ok` is not an
    /// error; it is reported as `Claude stop failed.`.
    #[tracing::instrument(skip(self))]
    pub async fn stop_claude(&self) -> Result<(), DeskError> {
        let result = self.backend.claude_stop().await;
        self.settle_claude(&result, ClaudeStatus::Stopped, "Claude stopped.", "Claude stop failed.");
        self.finish(result).await
    }

    /// Submit the create-app form.
    ///
    /// Blank language or name never reaches the backend; the form status
    /// shows the validation message instead. On success the status shows
    /// the queued task path and the dashboard refreshes.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Validation`] for missing fields, or the logged
    /// backend error.
    #[tracing::instrument(skip(self, instruction))]
    pub async fn create_app(
        &self,
        language: &str,
        name: &str,
        instruction: &str,
    ) -> Result<(), DeskError> {
        let request = match CreateAppRequest::from_form(language, name, instruction) {
            Ok(request) => request,
            Err(err) => {
                self.lock().app_status = Some(StatusMessage::failed(err.to_string()));
                return Err(err.into());
            }
        };

        self.lock().app_status = Some(StatusMessage::ok("Creating app..."));

        match self.backend.new_claude_task(&request).await {
            Ok(reply) if reply.ok => {
                let path = reply.path.unwrap_or_default();
                {
                    let mut state = self.lock();
                    state.app_status = Some(StatusMessage::ok(format!("Queued task: {path}")));
                    state
                        .activity
                        .record(now(), format!("Claude task queued at {path}"));
                }
                self.refresh().await;
                Ok(())
            }
            Ok(reply) => {
                let message = reply
                    .error
                    .filter(|msg| !msg.trim().is_empty())
                    .unwrap_or_else(|| CREATE_APP_FAILED.to_string());
                tracing::warn!(%message, "backend refused create-app request");
                self.lock().app_status = Some(StatusMessage::failed(message));
                Ok(())
            }
            Err(err) => {
                self.record_failure(&err);
                self.lock().app_status = Some(StatusMessage::failed(CREATE_APP_FAILED));
                Err(err)
            }
        }
    }

    fn set_watchers(&self, running: bool, message: &str) {
        let at = now();
        let mut state = self.lock();
        state.watcher.running = running;
        state.activity.record(at, message);
        state.snapshot.touch_sync(at);
        tracing::info!(running, "watcher state changed");
    }

    fn settle_claude<T>(
        &self,
        result: &Result<ActionReply, T>,
        target: ClaudeStatus,
        done: &str,
        refused: &str,
    ) {
        let mut state = self.lock();
        match result {
            Ok(reply) if reply.ok => {
                state.snapshot.claude = target;
                state.activity.record(now(), done);
            }
            _ => state.activity.record(now(), refused),
        }
    }

    /// Log a failed action, then refresh regardless of the outcome.
    async fn finish<T>(&self, result: Result<T, DeskError>) -> Result<(), DeskError> {
        if let Err(err) = &result {
            self.record_failure(err);
        }
        self.refresh().await;
        result.map(|_| ())
    }

    fn record_failure(&self, err: &DeskError) {
        tracing::warn!(error = %err, "backend action failed");
        if let Some(path) = err.failed_path() {
            self.log(format!("API error: {path}"));
        }
    }

    fn log(&self, message: impl AsRef<str>) {
        self.lock().activity.record(now(), message);
    }

    fn lock(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keep the section's value on success; note the failing path otherwise.
fn settle<T>(result: Result<T, DeskError>, failed: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "backend fetch failed");
            failed.push(err.failed_path().unwrap_or("unknown").to_string());
            None
        }
    }
}

/// Holds the orchestrator label at `Running` for as long as it lives.
struct OrchestratorRun<'a> {
    state: &'a Mutex<DashboardState>,
}

impl<'a> OrchestratorRun<'a> {
    fn begin(state: &'a Mutex<DashboardState>) -> Self {
        state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .orchestrator = OrchestratorStatus::Running;
        Self { state }
    }
}

impl Drop for OrchestratorRun<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .orchestrator = OrchestratorStatus::Ready;
    }
}
