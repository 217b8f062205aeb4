use std::sync::Arc;

use loantrack::domain::{DomainError, SnapshotStorage};
use loantrack::infrastructure::repositories::loan_repository::LOANS_KEY;
use loantrack::infrastructure::{JsonFileStorage, SnapshotLoanRepository};
use loantrack::models::loan::{LoanDraft, LoanStatus};
use loantrack::services::{loan_service, renewal_service};
use tempfile::TempDir;

// Helper to open a file-backed storage inside a temp dir
fn open_storage(dir: &TempDir) -> Arc<JsonFileStorage> {
    Arc::new(JsonFileStorage::open(dir.path().join("state.json")).expect("storage opens"))
}

// Helper to build a loan draft
fn draft(name: &str, amount: f64, rate: f64, due: &str) -> LoanDraft {
    LoanDraft {
        borrower_name: name.to_string(),
        address: "Rua das Flores, 12".to_string(),
        phone: "555-0100".to_string(),
        references: vec!["Maria - 555-0101".to_string(), "Pedro - 555-0102".to_string()],
        amount,
        interest_rate: rate,
        due_date: due.parse().expect("valid test date"),
    }
}

#[tokio::test]
async fn full_flow_survives_restart() {
    let dir = TempDir::new().unwrap();

    let renewed_id;
    let paid_id;
    {
        let storage = open_storage(&dir);
        let repo = SnapshotLoanRepository::load(storage).unwrap();

        let first = loan_service::create_loan(&repo, draft("Ana", 1000.0, 10.0, "2024-01-10"))
            .await
            .unwrap();
        let second = loan_service::create_loan(&repo, draft("Bruno", 300.0, 5.0, "2024-02-01"))
            .await
            .unwrap();
        let third = loan_service::create_loan(&repo, draft("Carla", 50.0, 0.0, "2024-03-01"))
            .await
            .unwrap();

        renewed_id = first.id;
        paid_id = second.id;

        renewal_service::renew_loan(&repo, first.id, 150.0, "2024-04-01")
            .await
            .unwrap();
        loan_service::toggle_paid(&repo, second.id).await.unwrap();
        loan_service::delete_loan(&repo, third.id).await.unwrap();
    }

    // Simulated restart: fresh storage handle, fresh repository
    let storage = open_storage(&dir);
    let repo = SnapshotLoanRepository::load(storage).unwrap();
    let listed = loan_service::list_loans(&repo).await.unwrap();

    assert_eq!(listed.len(), 2);

    assert_eq!(listed[0].id, renewed_id);
    assert_eq!(listed[0].amount, 950.0);
    assert_eq!(listed[0].due_date, "2024-04-01".parse().unwrap());
    assert_eq!(listed[0].status, LoanStatus::Current);
    assert!(!listed[0].is_paid);

    assert_eq!(listed[1].id, paid_id);
    assert!(listed[1].is_paid);
    assert_eq!(listed[1].references.len(), 2);
}

#[tokio::test]
async fn corrupt_snapshot_recovers_to_empty() {
    let dir = TempDir::new().unwrap();

    {
        let storage = open_storage(&dir);
        let repo = SnapshotLoanRepository::load(storage.clone()).unwrap();
        loan_service::create_loan(&repo, draft("Ana", 1000.0, 10.0, "2024-01-10"))
            .await
            .unwrap();

        // Clobber the persisted collection behind the repository's back
        storage.write(LOANS_KEY, "{\"this is\": \"not a loan list\"}").unwrap();
    }

    let storage = open_storage(&dir);
    let repo = SnapshotLoanRepository::load(storage).unwrap();
    assert!(loan_service::list_loans(&repo).await.unwrap().is_empty());

    // And the store accepts new records afterwards
    loan_service::create_loan(&repo, draft("Bruno", 300.0, 5.0, "2024-02-01"))
        .await
        .unwrap();
    assert_eq!(loan_service::list_loans(&repo).await.unwrap().len(), 1);
}

#[tokio::test]
async fn snapshot_uses_the_original_field_names() {
    let dir = TempDir::new().unwrap();
    let storage = open_storage(&dir);
    let repo = SnapshotLoanRepository::load(storage.clone()).unwrap();

    loan_service::create_loan(&repo, draft("Ana", 1000.0, 10.0, "2024-01-10"))
        .await
        .unwrap();

    let raw = storage.read(LOANS_KEY).unwrap().expect("snapshot written");
    for field in [
        "\"id\"",
        "\"borrowerName\"",
        "\"address\"",
        "\"phone\"",
        "\"references\"",
        "\"amount\"",
        "\"interestRate\"",
        "\"dueDate\"",
        "\"status\"",
        "\"isPaid\"",
    ] {
        assert!(raw.contains(field), "snapshot is missing {}: {}", field, raw);
    }
    assert!(raw.contains("\"open\""));
    assert!(raw.contains("\"2024-01-10\""));
}

#[tokio::test]
async fn rejected_operations_leave_the_collection_valid() {
    let dir = TempDir::new().unwrap();
    let storage = open_storage(&dir);
    let repo = SnapshotLoanRepository::load(storage).unwrap();

    let loan = loan_service::create_loan(&repo, draft("Ana", 1000.0, 10.0, "2024-01-10"))
        .await
        .unwrap();

    let err = loan_service::delete_loan(&repo, uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound));

    let err = renewal_service::renew_loan(&repo, loan.id, 9999.0, "2024-04-01")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidPayment(_)));

    let listed = loan_service::list_loans(&repo).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].amount, 1000.0);
}
