//! # vaultdesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered HTML dashboard** at `/`, rendered from
//!   the app layer's `DashboardView` through askama templates (auto-escaped)
//! - Accept user actions as plain HTML form POSTs under `/actions/...` and
//!   redirect back to the dashboard (PRG pattern)
//! - Serve the current view as JSON at `/api/view`
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - Buttons are `<form>` elements that POST back to the server.
//! - The page reloads itself with `<meta http-equiv="refresh">` at the poll
//!   interval, so it shows each new snapshot without client code.
//!
//! ## Dependency rule
//! Depends on `vaultdesk-app` (for the port trait and the dashboard service)
//! and `vaultdesk-domain`. Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
