//! Server-side rendered HTML dashboard (no JavaScript).
//!
//! - `GET  /`                           — the whole dashboard
//! - `POST /actions/watchers/start`     — mark local watchers running
//! - `POST /actions/watchers/stop`      — mark local watchers idle
//! - `POST /actions/orchestrator/run`   — run the orchestrator once
//! - `POST /actions/tasks/new`          — queue the canned draft-reply task
//! - `POST /actions/tasks/complete`     — complete the task at `path`
//! - `POST /actions/approvals/approve`  — approve the item at `path`
//! - `POST /actions/approvals/reject`   — reject the item at `path`
//! - `POST /actions/vault/reveal`       — write the vault path to the work log
//! - `POST /actions/claude/start`       — start the Claude process
//! - `POST /actions/claude/stop`        — stop the Claude process
//! - `POST /actions/apps`               — queue a create-app task
//!
//! Every action answers `303 See Other` back to `/` (PRG pattern).

#[allow(clippy::missing_errors_doc)]
pub mod actions;
pub mod home;

use axum::Router;
use axum::routing::{get, post};

use vaultdesk_app::ports::DeskBackend;

use crate::state::AppState;

/// Build the dashboard sub-router for the SSR page and its form actions.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: DeskBackend + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<B>))
        .route("/actions/watchers/start", post(actions::start_watchers::<B>))
        .route("/actions/watchers/stop", post(actions::stop_watchers::<B>))
        .route("/actions/orchestrator/run", post(actions::run_orchestrator::<B>))
        .route("/actions/tasks/new", post(actions::new_task::<B>))
        .route("/actions/tasks/complete", post(actions::complete_task::<B>))
        .route("/actions/approvals/approve", post(actions::approve::<B>))
        .route("/actions/approvals/reject", post(actions::reject::<B>))
        .route("/actions/vault/reveal", post(actions::reveal_vault::<B>))
        .route("/actions/claude/start", post(actions::start_claude::<B>))
        .route("/actions/claude/stop", post(actions::stop_claude::<B>))
        .route("/actions/apps", post(actions::create_app::<B>))
}
