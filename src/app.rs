//! Application lifecycle
//!
//! Wires configuration, snapshot storage, state and the background status
//! refresher together. Whatever drives the UI holds an `App` and talks to
//! its `AppState`.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::DomainError;
use crate::infrastructure::config::Config;
use crate::infrastructure::storage::JsonFileStorage;
use crate::infrastructure::AppState;
use crate::scheduler::StatusRefresher;

/// Initialize tracing output. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loantrack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Load configuration, reading a `.env` file when present
pub fn load_config() -> Config {
    dotenvy::dotenv().ok();
    Config::from_env()
}

pub struct App {
    state: AppState,
    refresher: Option<StatusRefresher>,
}

impl App {
    /// Open the snapshot storage, load the loan collection and start the
    /// status refresher. Must be called from within a tokio runtime.
    pub fn start(config: Config) -> Result<Self, DomainError> {
        let storage = Arc::new(JsonFileStorage::open(&config.storage_path)?);
        let state = AppState::new(storage, &config)?;

        let refresher = StatusRefresher::spawn(
            state.loans.clone(),
            Duration::from_secs(config.refresh_interval_secs),
        );

        tracing::info!("loantrack started (storage: {:?})", config.storage_path);

        Ok(Self {
            state,
            refresher: Some(refresher),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Stop the refresher. The snapshot is already durable: every mutation
    /// persisted synchronously, so there is nothing to flush.
    pub fn shutdown(mut self) {
        if let Some(refresher) = self.refresher.take() {
            refresher.shutdown();
        }
        tracing::info!("loantrack stopped");
    }
}
