//! Shared application state for axum handlers.

use std::sync::Arc;

use vaultdesk_app::ports::DeskBackend;
use vaultdesk_app::services::dashboard_service::DashboardService;

/// Application state shared across all axum handlers.
///
/// Generic over the backend to avoid dynamic dispatch. `Clone` is
/// implemented manually so the backend itself does not need to be `Clone`;
/// only the `Arc` wrapper is cloned.
pub struct AppState<B> {
    /// The dashboard controller, shared with the poll loop.
    pub dashboard: Arc<DashboardService<B>>,
    /// `<meta http-equiv="refresh">` period for the HTML dashboard.
    pub refresh_seconds: u64,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            dashboard: Arc::clone(&self.dashboard),
            refresh_seconds: self.refresh_seconds,
        }
    }
}

impl<B> AppState<B>
where
    B: DeskBackend + Send + Sync + 'static,
{
    /// Create a new application state owning `dashboard`.
    pub fn new(dashboard: DashboardService<B>, refresh_seconds: u64) -> Self {
        Self::from_arc(Arc::new(dashboard), refresh_seconds)
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with the poll loop.
    pub fn from_arc(dashboard: Arc<DashboardService<B>>, refresh_seconds: u64) -> Self {
        Self {
            dashboard,
            refresh_seconds,
        }
    }
}
