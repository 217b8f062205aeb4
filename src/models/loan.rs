use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state stored on a loan.
///
/// `open` and `current` can be forced by the user; `overdue` is only ever
/// produced by the status deriver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Open,
    Current,
    Overdue,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanStatus::Open => write!(f, "open"),
            LoanStatus::Current => write!(f, "current"),
            LoanStatus::Overdue => write!(f, "overdue"),
        }
    }
}

/// What a list/card layer should show for a loan.
///
/// Paid supersedes the stored status; the stored field itself is never
/// rewritten when a loan is marked paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Paid,
    Open,
    Current,
    Overdue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: Uuid,
    pub borrower_name: String,
    pub address: String,
    pub phone: String,
    /// Reference contacts' names/phones, in the order they were entered
    pub references: Vec<String>,
    /// Principal, always >= 0
    pub amount: f64,
    /// Interest percentage, always >= 0
    pub interest_rate: f64,
    pub due_date: NaiveDate,
    pub status: LoanStatus,
    pub is_paid: bool,
}

impl Loan {
    pub fn display_state(&self) -> DisplayState {
        if self.is_paid {
            return DisplayState::Paid;
        }
        match self.status {
            LoanStatus::Open => DisplayState::Open,
            LoanStatus::Current => DisplayState::Current,
            LoanStatus::Overdue => DisplayState::Overdue,
        }
    }
}

/// Form input for registering a new loan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDraft {
    pub borrower_name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub references: Vec<String>,
    pub amount: f64,
    pub interest_rate: f64,
    pub due_date: NaiveDate,
}
