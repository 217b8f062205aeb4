//! Repository implementations over the snapshot storage

pub mod loan_repository;

pub use loan_repository::SnapshotLoanRepository;
