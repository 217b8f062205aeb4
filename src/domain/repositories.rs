//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::DomainError;
use crate::models::loan::{Loan, LoanDraft, LoanStatus};

/// String key/value snapshot storage.
///
/// Writes are synchronous and replace the value for the key as a whole;
/// a missing key reads back as `None`.
pub trait SnapshotStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Remove the value stored under `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}

/// Input for partially updating a loan
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPatch {
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<LoanStatus>,
    pub is_paid: Option<bool>,
}

/// Repository trait for the Loan entity
///
/// The collection is the unit of persistence: every mutating call writes
/// the full ordered list back to the snapshot storage before returning.
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// All loans in insertion order
    async fn list(&self) -> Result<Vec<Loan>, DomainError>;

    /// Find a loan by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Loan>, DomainError>;

    /// Create a new loan with a fresh unique id, `status = open` and
    /// `isPaid = false`
    async fn create(&self, draft: LoanDraft) -> Result<Loan, DomainError>;

    /// Apply a partial update to an existing loan
    async fn update(&self, id: Uuid, patch: LoanPatch) -> Result<Loan, DomainError>;

    /// Delete a loan by ID
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
