//! Balance Calculation
//!
//! The balance is never stored; it is recomputed from the statement on every
//! query, so it cannot drift from the operations that produced it.

use super::customer::{Operation, OperationKind};

/// Net balance of a statement: credits added, debits subtracted, folded in
/// append order from a zero accumulator. An empty statement yields zero.
pub fn balance(statement: &[Operation]) -> f64 {
    statement
        .iter()
        .fold(0.0, |acc, operation| match operation.kind {
            OperationKind::Credit => acc + operation.amount,
            OperationKind::Debit => acc - operation.amount,
        })
}
