//! # vaultdeskd — vaultdesk daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize `tracing` logging
//! - Construct the reqwest backend client (adapter)
//! - Construct the dashboard service, injecting the backend via its port trait
//! - Spawn the poll loop that refreshes the dashboard on a fixed interval
//! - Build the axum router, injecting the shared dashboard service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C / SIGTERM), stopping the poll loop
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use vaultdesk_adapter_backend_reqwest::HttpBackend;
use vaultdesk_adapter_http_axum::state::AppState;
use vaultdesk_app::poller;
use vaultdesk_app::services::dashboard_service::DashboardService;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Backend
    let backend = HttpBackend::with_timeout(&config.backend.base_url, config.request_timeout())?;
    tracing::info!(
        backend = backend.base_url(),
        timeout_secs = config.backend.timeout_secs,
        "backend client ready"
    );

    // Services
    let dashboard = Arc::new(DashboardService::new(backend));

    // Poll loop
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poll_handle = poller::spawn(Arc::clone(&dashboard), config.poll_interval(), shutdown_rx);

    // HTTP
    let state = AppState::from_arc(dashboard, config.poll.interval_secs);
    let app = vaultdesk_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("vaultdeskd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The receiver may already be gone if the poll loop ended on its own.
    let _ = shutdown_tx.send(true);
    if let Err(err) = poll_handle.await {
        tracing::warn!(error = %err, "poll loop did not stop cleanly");
    }

    tracing::info!("vaultdeskd stopped");
    Ok(())
}

/// Resolve once Ctrl-C or (on Unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
