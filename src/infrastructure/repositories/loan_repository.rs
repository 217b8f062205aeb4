//! Snapshot-backed implementation of LoanRepository
//!
//! The whole collection lives in memory and is mirrored to the snapshot
//! storage under one fixed key after every mutation, exactly as the
//! persisted form: an ordered JSON array of loan records.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{DomainError, LoanPatch, LoanRepository, SnapshotStorage};
use crate::models::loan::{Loan, LoanDraft, LoanStatus};

/// Storage key holding the serialized loan collection
pub const LOANS_KEY: &str = "loans";

/// Snapshot-backed implementation of LoanRepository
///
/// The mutex serializes the periodic status refresh against user-triggered
/// mutations, so a tick can never race a form submission on the snapshot.
pub struct SnapshotLoanRepository {
    storage: Arc<dyn SnapshotStorage>,
    loans: Mutex<Vec<Loan>>,
}

impl SnapshotLoanRepository {
    /// Load the persisted collection, starting empty when the key is absent.
    /// A snapshot that no longer decodes is corrupt state: it is dropped
    /// with a warning and replaced by an empty collection on the next write.
    pub fn load(storage: Arc<dyn SnapshotStorage>) -> Result<Self, DomainError> {
        let loans = match storage.read(LOANS_KEY)? {
            Some(raw) => match decode_snapshot(&raw) {
                Ok(loans) => loans,
                Err(e) => {
                    tracing::warn!("Discarding corrupt loan snapshot: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self {
            storage,
            loans: Mutex::new(loans),
        })
    }

    fn persist(&self, loans: &[Loan]) -> Result<(), DomainError> {
        let raw = serde_json::to_string(loans)?;
        self.storage.write(LOANS_KEY, &raw)
    }
}

fn decode_snapshot(raw: &str) -> Result<Vec<Loan>, DomainError> {
    serde_json::from_str(raw).map_err(|e| DomainError::CorruptState(e.to_string()))
}

fn validate_money(amount: f64, interest_rate: f64) -> Result<(), DomainError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DomainError::Validation(format!(
            "amount must not be negative, got {}",
            amount
        )));
    }
    if !interest_rate.is_finite() || interest_rate < 0.0 {
        return Err(DomainError::Validation(format!(
            "interest rate must not be negative, got {}",
            interest_rate
        )));
    }
    Ok(())
}

#[async_trait]
impl LoanRepository for SnapshotLoanRepository {
    async fn list(&self) -> Result<Vec<Loan>, DomainError> {
        Ok(self.loans.lock().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Loan>, DomainError> {
        Ok(self.loans.lock().await.iter().find(|l| l.id == id).cloned())
    }

    async fn create(&self, draft: LoanDraft) -> Result<Loan, DomainError> {
        validate_money(draft.amount, draft.interest_rate)?;

        let loan = Loan {
            id: Uuid::new_v4(),
            borrower_name: draft.borrower_name,
            address: draft.address,
            phone: draft.phone,
            references: draft.references,
            amount: draft.amount,
            interest_rate: draft.interest_rate,
            due_date: draft.due_date,
            status: LoanStatus::Open,
            is_paid: false,
        };

        let mut loans = self.loans.lock().await;
        loans.push(loan.clone());
        if let Err(e) = self.persist(&loans) {
            loans.pop();
            return Err(e);
        }

        Ok(loan)
    }

    async fn update(&self, id: Uuid, patch: LoanPatch) -> Result<Loan, DomainError> {
        let mut loans = self.loans.lock().await;
        let idx = loans
            .iter()
            .position(|l| l.id == id)
            .ok_or(DomainError::NotFound)?;

        let mut updated = loans[idx].clone();
        if let Some(amount) = patch.amount {
            updated.amount = amount;
        }
        if let Some(due_date) = patch.due_date {
            updated.due_date = due_date;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(is_paid) = patch.is_paid {
            updated.is_paid = is_paid;
        }
        validate_money(updated.amount, updated.interest_rate)?;

        let previous = std::mem::replace(&mut loans[idx], updated.clone());
        if let Err(e) = self.persist(&loans) {
            loans[idx] = previous;
            return Err(e);
        }

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut loans = self.loans.lock().await;
        let idx = loans
            .iter()
            .position(|l| l.id == id)
            .ok_or(DomainError::NotFound)?;

        let removed = loans.remove(idx);
        if let Err(e) = self.persist(&loans) {
            loans.insert(idx, removed);
            return Err(e);
        }

        Ok(())
    }
}
