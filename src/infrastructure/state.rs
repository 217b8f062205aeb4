//! Application state containing repositories and shared resources

use std::sync::Arc;

use crate::domain::{DomainError, LoanRepository, SnapshotStorage};
use crate::infrastructure::auth::AuthService;
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::SnapshotLoanRepository;

/// Application state shared between user-facing callers and the refresher
#[derive(Clone)]
pub struct AppState {
    /// Loan record store
    pub loans: Arc<dyn LoanRepository>,
    /// Authentication collaborator
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Create a new AppState over the given snapshot storage
    pub fn new(storage: Arc<dyn SnapshotStorage>, config: &Config) -> Result<Self, DomainError> {
        let loans = Arc::new(SnapshotLoanRepository::load(storage.clone())?);
        let auth = Arc::new(AuthService::new(
            storage,
            config.username.clone(),
            config.password.clone(),
        ));

        Ok(Self { loans, auth })
    }
}
