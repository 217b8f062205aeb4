//! Renewal Service - interest math and loan rollover
//! Mirrored from loan_service.rs

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{DomainError, LoanPatch, LoanRepository};
use crate::models::loan::{Loan, LoanStatus};

/// Total amount owed on a principal at the given interest rate (percent)
pub fn total_owed(amount: f64, interest_rate: f64) -> f64 {
    amount * (1.0 + interest_rate / 100.0)
}

/// The interest share of the total owed
pub fn interest_portion(amount: f64, interest_rate: f64) -> f64 {
    total_owed(amount, interest_rate) - amount
}

/// Outcome of applying a payment against a loan's total owed
#[derive(Debug, Clone, PartialEq)]
pub struct RenewalQuote {
    pub total_owed: f64,
    pub interest_portion: f64,
    pub new_principal: f64,
}

/// Compute the rollover for a payment.
///
/// The payment clears accrued interest first; only the remainder reduces
/// the principal. A payment at or below the interest portion leaves the
/// principal untouched.
pub fn quote_renewal(
    amount: f64,
    interest_rate: f64,
    payment: f64,
) -> Result<RenewalQuote, DomainError> {
    let total = total_owed(amount, interest_rate);

    if !payment.is_finite() || payment < 0.0 {
        return Err(DomainError::InvalidPayment(format!(
            "payment must not be negative, got {}",
            payment
        )));
    }
    if payment > total {
        return Err(DomainError::InvalidPayment(format!(
            "payment {} exceeds the total owed {}",
            payment, total
        )));
    }

    let interest = total - amount;
    let new_principal = if payment > interest {
        amount - (payment - interest)
    } else {
        amount
    };

    Ok(RenewalQuote {
        total_owed: total,
        interest_portion: interest,
        new_principal,
    })
}

/// Parse a renewal due date from form input (`YYYY-MM-DD`)
pub fn parse_due_date(input: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| DomainError::InvalidDate(format!("'{}': {}", input, e)))
}

/// Renew a loan: apply the payment, rewrite the principal and due date,
/// and force the status back to `current`. The paid flag is untouched.
pub async fn renew_loan(
    repo: &dyn LoanRepository,
    id: Uuid,
    payment: f64,
    new_due_date: &str,
) -> Result<Loan, DomainError> {
    let loan = repo
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound)?;

    let quote = quote_renewal(loan.amount, loan.interest_rate, payment)?;
    let due_date = parse_due_date(new_due_date)?;

    let renewed = repo
        .update(
            id,
            LoanPatch {
                amount: Some(quote.new_principal),
                due_date: Some(due_date),
                status: Some(LoanStatus::Current),
                ..Default::default()
            },
        )
        .await?;

    tracing::info!(
        "Loan for {} renewed until {} (principal {} -> {})",
        renewed.borrower_name,
        due_date,
        loan.amount,
        renewed.amount
    );

    Ok(renewed)
}
