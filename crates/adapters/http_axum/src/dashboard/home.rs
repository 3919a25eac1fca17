//! Dashboard home page — every panel on one page.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use vaultdesk_app::ports::DeskBackend;
use vaultdesk_app::view::DashboardView;

use crate::state::AppState;

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    refresh_seconds: u64,
    view: DashboardView,
}

impl IntoResponse for DashboardTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — render the latest snapshot.
pub async fn index<B>(State(state): State<AppState<B>>) -> DashboardTemplate
where
    B: DeskBackend + Send + Sync + 'static,
{
    DashboardTemplate {
        refresh_seconds: state.refresh_seconds,
        view: state.dashboard.view(),
    }
}
