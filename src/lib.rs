//! finapi Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod domain;
pub mod store;

// Private modules (used only by main.rs binary)
pub mod config;
mod error;

pub use config::Config;
pub use domain::{balance, Customer, DomainError, Operation, OperationKind};
pub use error::{AppError, AppResult};
pub use store::AccountStore;
