//! JSON API handlers.
//!
//! - `GET /api/view` — the current rendered dashboard as JSON

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use vaultdesk_app::ports::DeskBackend;
use vaultdesk_app::view::DashboardView;

use crate::state::AppState;

/// Build the JSON API sub-router, nested under `/api`.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: DeskBackend + Send + Sync + 'static,
{
    Router::new().route("/view", get(view::<B>))
}

/// `GET /api/view` — the view the HTML dashboard is rendered from.
pub async fn view<B>(State(state): State<AppState<B>>) -> Json<DashboardView>
where
    B: DeskBackend + Send + Sync + 'static,
{
    Json(state.dashboard.view())
}
