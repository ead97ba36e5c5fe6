//! Domain Error Types
//!
//! Pure domain errors with no infrastructure dependencies.

use thiserror::Error;

/// Business-rule failures of the ledger.
///
/// The `Display` strings double as the wire messages: whatever a variant
/// renders here is exactly what the caller sees in the `error` field of the
/// response body, punctuation included.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// No stored customer matches the supplied cpf.
    #[error("Customer not found!")]
    CustomerNotFound,

    /// Account creation with a cpf that is already taken.
    #[error("Customer already exists!")]
    CustomerAlreadyExists,

    /// Withdrawal larger than the current balance.
    #[error("Amount out of range")]
    AmountOutOfRange,
}
