//! # vaultdesk-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven/outbound port** adapters must implement:
//!   - `DeskBackend` — the vault backend's JSON API
//! - Define the **driving/inbound** use-cases:
//!   - `DashboardService` — the dashboard controller: refresh cycles and user actions
//!   - `poller` — the fixed-interval refresh loop
//!   - `view` — the declarative `Snapshot → DashboardView` render function
//! - Orchestrate domain objects without knowing *how* the backend is reached
//!
//! ## Dependency rule
//! Depends on `vaultdesk-domain` only (plus `tokio::sync` / `tokio::time`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod poller;
pub mod ports;
pub mod services;
pub mod view;
