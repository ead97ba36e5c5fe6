//! Customer Lookup Guard
//!
//! Resolves the caller-supplied `cpf` header to a stored customer before a
//! handler runs. Every endpoint except account creation requires it.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::domain::{Customer, DomainError};
use crate::error::AppError;
use crate::store::AccountStore;

/// Request header carrying the customer's tax id.
pub const CPF_HEADER: &str = "cpf";

/// A customer resolved from the `cpf` request header.
///
/// Extraction short-circuits the request when the header is missing, not
/// valid UTF-8, or matches no stored customer; all three cases produce the
/// same not-found response, so a handler taking this extractor never runs
/// without a verified customer. The carried record is a point-in-time
/// clone: handlers that mutate re-enter the store keyed by its cpf rather
/// than writing through the clone.
#[derive(Debug, Clone)]
pub struct VerifiedCustomer {
    pub customer: Customer,
}

#[async_trait]
impl FromRequestParts<AccountStore> for VerifiedCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        store: &AccountStore,
    ) -> Result<Self, Self::Rejection> {
        let cpf = parts
            .headers
            .get(CPF_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(DomainError::CustomerNotFound)?;

        let customer = store
            .find_by_cpf(cpf)
            .await
            .ok_or(DomainError::CustomerNotFound)?;

        Ok(Self { customer })
    }
}
