//! Services Layer
//!
//! This module contains pure business logic over the loan record store.
//! Services are called by whatever drives the UI and by the background
//! status refresher.

pub mod loan_service;
pub mod renewal_service;

// Re-export for convenience
pub use loan_service::derive_status;
pub use renewal_service::{interest_portion, total_owed};
