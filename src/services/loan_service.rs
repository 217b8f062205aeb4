//! Loan Service - Pure business logic without a presentation layer

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{DomainError, LoanPatch, LoanRepository};
use crate::models::loan::{Loan, LoanDraft, LoanStatus};

/// List all loans in insertion order
pub async fn list_loans(repo: &dyn LoanRepository) -> Result<Vec<Loan>, DomainError> {
    repo.list().await
}

/// Register a new loan from form input
pub async fn create_loan(
    repo: &dyn LoanRepository,
    draft: LoanDraft,
) -> Result<Loan, DomainError> {
    let loan = repo.create(draft).await?;
    tracing::info!(
        "Loan registered for {} (due {})",
        loan.borrower_name,
        loan.due_date
    );
    Ok(loan)
}

/// Flip the paid flag on a loan
pub async fn toggle_paid(repo: &dyn LoanRepository, id: Uuid) -> Result<Loan, DomainError> {
    let loan = repo
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound)?;

    repo.update(
        id,
        LoanPatch {
            is_paid: Some(!loan.is_paid),
            ..Default::default()
        },
    )
    .await
}

/// Force a loan's stored status.
///
/// Only `open` and `current` can be forced; `overdue` is owned by the
/// deriver. A forced value holds until the next periodic recompute.
pub async fn override_status(
    repo: &dyn LoanRepository,
    id: Uuid,
    status: LoanStatus,
) -> Result<Loan, DomainError> {
    if status == LoanStatus::Overdue {
        return Err(DomainError::Validation(
            "status can only be forced to open or current".to_string(),
        ));
    }

    repo.update(
        id,
        LoanPatch {
            status: Some(status),
            ..Default::default()
        },
    )
    .await
}

/// Delete a loan
pub async fn delete_loan(repo: &dyn LoanRepository, id: Uuid) -> Result<(), DomainError> {
    repo.delete(id).await
}

/// Derive the lifecycle state of a loan as of `today`.
///
/// Paid loans keep whatever status is stored on them. Unpaid loans are
/// `overdue` strictly after the due date and `current` otherwise; the due
/// day itself is not overdue.
pub fn derive_status(loan: &Loan, today: NaiveDate) -> LoanStatus {
    if loan.is_paid {
        return loan.status;
    }
    if today > loan.due_date {
        LoanStatus::Overdue
    } else {
        LoanStatus::Current
    }
}

/// Recompute every loan's status for `today`, writing back only the records
/// whose status changed. Returns how many records were reclassified.
///
/// Repeated application with the same `today` and unchanged input is a
/// no-op after the first pass.
pub async fn refresh_statuses(
    repo: &dyn LoanRepository,
    today: NaiveDate,
) -> Result<usize, DomainError> {
    let loans = repo.list().await?;
    let mut changed = 0;

    for loan in loans {
        let next = derive_status(&loan, today);
        if next != loan.status {
            repo.update(
                loan.id,
                LoanPatch {
                    status: Some(next),
                    ..Default::default()
                },
            )
            .await?;
            changed += 1;
        }
    }

    Ok(changed)
}
