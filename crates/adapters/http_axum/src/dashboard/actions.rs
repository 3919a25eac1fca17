//! Form actions. Each forwards to the dashboard service and redirects home.

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use vaultdesk_app::ports::DeskBackend;
use vaultdesk_domain::error::DeskError;

use crate::error::ActionError;
use crate::state::AppState;

/// Form data carrying a single work-item path.
#[derive(Debug, Deserialize)]
pub struct PathForm {
    #[serde(default)]
    pub path: String,
}

/// Form data for the create-app panel.
#[derive(Debug, Deserialize)]
pub struct CreateAppForm {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub instruction: String,
}

fn home() -> Redirect {
    Redirect::to("/")
}

/// Backend failures are already on the work log; only invalid input is an
/// HTTP error.
fn settle(result: Result<(), DeskError>) -> Result<Redirect, ActionError> {
    match result {
        Ok(()) | Err(DeskError::Backend(_)) => Ok(home()),
        Err(DeskError::Validation(err)) => Err(err.into()),
    }
}

/// `POST /actions/watchers/start`.
pub async fn start_watchers<B>(State(state): State<AppState<B>>) -> Redirect
where
    B: DeskBackend + Send + Sync + 'static,
{
    state.dashboard.start_watchers();
    home()
}

/// `POST /actions/watchers/stop`.
pub async fn stop_watchers<B>(State(state): State<AppState<B>>) -> Redirect
where
    B: DeskBackend + Send + Sync + 'static,
{
    state.dashboard.stop_watchers();
    home()
}

/// `POST /actions/orchestrator/run`.
pub async fn run_orchestrator<B>(
    State(state): State<AppState<B>>,
) -> Result<Redirect, ActionError>
where
    B: DeskBackend + Send + Sync + 'static,
{
    settle(state.dashboard.run_orchestrator().await)
}

/// `POST /actions/tasks/new`.
pub async fn new_task<B>(State(state): State<AppState<B>>) -> Result<Redirect, ActionError>
where
    B: DeskBackend + Send + Sync + 'static,
{
    settle(state.dashboard.queue_new_task().await)
}

/// `POST /actions/tasks/complete`.
pub async fn complete_task<B>(
    State(state): State<AppState<B>>,
    Form(form): Form<PathForm>,
) -> Result<Redirect, ActionError>
where
    B: DeskBackend + Send + Sync + 'static,
{
    settle(state.dashboard.complete_task(&form.path).await)
}

/// `POST /actions/approvals/approve`.
pub async fn approve<B>(
    State(state): State<AppState<B>>,
    Form(form): Form<PathForm>,
) -> Result<Redirect, ActionError>
where
    B: DeskBackend + Send + Sync + 'static,
{
    settle(state.dashboard.approve(&form.path).await)
}

/// `POST /actions/approvals/reject`.
pub async fn reject<B>(
    State(state): State<AppState<B>>,
    Form(form): Form<PathForm>,
) -> Result<Redirect, ActionError>
where
    B: DeskBackend + Send + Sync + 'static,
{
    settle(state.dashboard.reject(&form.path).await)
}

/// `POST /actions/vault/reveal`.
pub async fn reveal_vault<B>(State(state): State<AppState<B>>) -> Result<Redirect, ActionError>
where
    B: DeskBackend + Send + Sync + 'static,
{
    settle(state.dashboard.reveal_vault().await)
}

/// `POST /actions/claude/start`.
pub async fn start_claude<B>(State(state): State<AppState<B>>) -> Result<Redirect, ActionError>
where
    B: DeskBackend + Send + Sync + 'static,
{
    settle(state.dashboard.start_claude().await)
}

/// `POST /actions/claude/stop`.
pub async fn stop_claude<B>(State(state): State<AppState<B>>) -> Result<Redirect, ActionError>
where
    B: DeskBackend + Send + Sync + 'static,
{
    settle(state.dashboard.stop_claude().await)
}

/// `POST /actions/apps` — missing fields show up in the form status, not as
/// an HTTP error.
pub async fn create_app<B>(
    State(state): State<AppState<B>>,
    Form(form): Form<CreateAppForm>,
) -> Redirect
where
    B: DeskBackend + Send + Sync + 'static,
{
    if let Err(err) = state
        .dashboard
        .create_app(&form.language, &form.name, &form.instruction)
        .await
    {
        tracing::debug!(error = %err, "create-app request not queued");
    }
    home()
}
