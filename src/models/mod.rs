pub mod loan;

pub use loan::{Loan, LoanDraft, LoanStatus};
