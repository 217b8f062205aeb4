//! Periodic status recomputation
//!
//! The refresher is owned by the application lifecycle: started on init,
//! aborted on shutdown. It mutates loans through the same repository API
//! as user actions, so the snapshot can never see a half-applied tick.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::task::JoinHandle;

use crate::domain::LoanRepository;
use crate::services::loan_service;

pub struct StatusRefresher {
    handle: JoinHandle<()>,
}

impl StatusRefresher {
    /// Spawn the refresh loop on the current runtime
    pub fn spawn(repo: Arc<dyn LoanRepository>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            run_refresher(repo, period).await;
        });
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the refresh loop
    pub fn shutdown(self) {
        self.handle.abort();
        tracing::info!("Status refresher stopped");
    }
}

async fn run_refresher(repo: Arc<dyn LoanRepository>, period: Duration) {
    tracing::info!("Status refresher started (every {:?})", period);

    let mut ticker = tokio::time::interval(period);
    // The first interval tick completes immediately; consume it so the
    // first recompute happens one full period after startup
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let today = Local::now().date_naive();
        match loan_service::refresh_statuses(repo.as_ref(), today).await {
            Ok(changed) if changed > 0 => {
                tracing::info!("Reclassified {} loan(s)", changed);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Status refresh failed: {}", e);
            }
        }
    }
}
