pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod scheduler;
pub mod services;

// Re-exports for convenience
pub use app::App;
pub use domain::DomainError;
pub use infrastructure::auth;
pub use infrastructure::config;
pub use infrastructure::AppState;
