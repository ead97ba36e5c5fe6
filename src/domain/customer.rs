//! Customer Records
//!
//! The ledger's data model: a customer keyed by cpf and the append-only
//! statement of operations recorded against it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether an operation raises or lowers the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Credit,
    Debit,
}

/// One statement entry. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Free-form label; debits carry none and the field is then absent from
    /// the serialized form entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl Operation {
    /// A credit stamped with the current time.
    pub fn credit(description: Option<String>, amount: f64) -> Self {
        Self {
            description,
            amount,
            created_at: Utc::now(),
            kind: OperationKind::Credit,
        }
    }

    /// A debit stamped with the current time.
    pub fn debit(amount: f64) -> Self {
        Self {
            description: None,
            amount,
            created_at: Utc::now(),
            kind: OperationKind::Debit,
        }
    }
}

/// A customer record: server-assigned id, unique cpf, mutable display name,
/// and the statement in append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub cpf: String,
    pub name: String,
    pub statement: Vec<Operation>,
}

impl Customer {
    /// A new customer with a fresh id and an empty statement.
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf: cpf.into(),
            name: name.into(),
            statement: Vec::new(),
        }
    }
}
