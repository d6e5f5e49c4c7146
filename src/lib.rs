//! ModelScope Balance Query Library
//!
//! Queries ModelScope rate-limit balances for a batch of models and
//! aggregates the per-model outcomes into a single response

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, AppState};
pub use models::{BalanceItem, BalanceRequest, BalanceResponse, RateLimitSnapshot};
pub use services::ModelScopeClient;
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
