//! Domain module
//!
//! Core domain types and business logic.

pub mod balance;
pub mod customer;
pub mod error;

pub use balance::balance;
pub use customer::{Customer, Operation, OperationKind};
pub use error::DomainError;
