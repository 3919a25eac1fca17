//! Poller — drives [`DashboardService::refresh`] on a fixed period.
//!
//! The first refresh fires immediately, then one per period. A slow cycle
//! delays the next tick instead of bursting to catch up. The loop exits as
//! soon as the shutdown channel flips to `true` or its sender is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ports::DeskBackend;
use crate::services::dashboard_service::DashboardService;

/// Spawn the poll loop on the current runtime.
pub fn spawn<B>(
    service: Arc<DashboardService<B>>,
    period: Duration,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    B: DeskBackend + Send + Sync + 'static,
{
    tokio::spawn(run(service, period, shutdown))
}

/// Refresh every `period` until shutdown is signalled.
pub async fn run<B>(
    service: Arc<DashboardService<B>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) where
    B: DeskBackend + Sync,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!(period_secs = period.as_secs(), "poll loop started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let report = service.refresh().await;
                if !report.is_complete() {
                    tracing::warn!(failed = ?report.failed, "refresh cycle incomplete");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    tracing::info!("poll loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultdesk_domain::action::{ActionReply, CreateAppRequest, NewTask, VaultInfo};
    use vaultdesk_domain::error::DeskError;
    use vaultdesk_domain::summary::Summary;
    use vaultdesk_domain::work_item::WorkItem;

    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingBackend {
        summaries: AtomicUsize,
    }

    impl DeskBackend for CountingBackend {
        async fn summary(&self) -> Result<Summary, DeskError> {
            self.summaries.fetch_add(1, Ordering::SeqCst);
            Ok(Summary::default())
        }
        async fn tasks(&self) -> Result<Vec<WorkItem>, DeskError> {
            Ok(Vec::new())
        }
        async fn approvals(&self) -> Result<Vec<WorkItem>, DeskError> {
            Ok(Vec::new())
        }
        async fn work_log(&self) -> Result<Vec<String>, DeskError> {
            Ok(Vec::new())
        }
        async fn claude_log(&self) -> Result<Vec<String>, DeskError> {
            Ok(Vec::new())
        }
        async fn vault_path(&self) -> Result<VaultInfo, DeskError> {
            Ok(VaultInfo::default())
        }
        async fn run_orchestrator(&self) -> Result<ActionReply, DeskError> {
            Ok(ActionReply::ok())
        }
        async fn new_task(&self, _task: &NewTask) -> Result<ActionReply, DeskError> {
            Ok(ActionReply::ok())
        }
        async fn approve(&self, _path: &str) -> Result<ActionReply, DeskError> {
            Ok(ActionReply::ok())
        }
        async fn reject(&self, _path: &str) -> Result<ActionReply, DeskError> {
            Ok(ActionReply::ok())
        }
        async fn complete_task(&self, _path: &str) -> Result<ActionReply, DeskError> {
            Ok(ActionReply::ok())
        }
        async fn claude_start(&self) -> Result<ActionReply, DeskError> {
            Ok(ActionReply::ok())
        }
        async fn claude_stop(&self) -> Result<ActionReply, DeskError> {
            Ok(ActionReply::ok())
        }
        async fn new_claude_task(
            &self,
            _request: &CreateAppRequest,
        ) -> Result<ActionReply, DeskError> {
            Ok(ActionReply::ok())
        }
    }

    fn summaries(service: &DashboardService<CountingBackend>) -> usize {
        service.backend().summaries.load(Ordering::SeqCst)
    }

    #[tokio::test(start_paused = true)]
    async fn should_refresh_immediately_then_every_period() {
        let service = Arc::new(DashboardService::new(CountingBackend::default()));
        let (tx, rx) = watch::channel(false);
        let handle = spawn(Arc::clone(&service), Duration::from_secs(15), rx);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(summaries(&service), 1);

        tokio::time::sleep(Duration::from_secs(15)).await;
        assert_eq!(summaries(&service), 2);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(summaries(&service), 4);

        tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_when_shutdown_sender_dropped() {
        let service = Arc::new(DashboardService::new(CountingBackend::default()));
        let (tx, rx) = watch::channel(false);
        let handle = spawn(Arc::clone(&service), Duration::from_secs(15), rx);

        tokio::time::sleep(Duration::from_millis(1)).await;
        drop(tx);
        handle.await.unwrap();

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(summaries(&service), 1);
    }
}
