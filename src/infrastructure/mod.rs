//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Snapshot storage backends (storage)
//! - Configuration loading (config)
//! - Authentication (auth)
//! - Repository implementations (repositories)
//! - Application state (state)

pub mod auth;
pub mod config;
pub mod repositories;
pub mod state;
pub mod storage;

pub use repositories::SnapshotLoanRepository;
pub use state::AppState;
pub use storage::{JsonFileStorage, MemoryStorage};
