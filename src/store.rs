//! Account Store
//!
//! Process-lifetime, in-memory collection of customer records. State lives
//! behind a single reader-writer lock and is gone on shutdown; handlers get
//! a cloned handle through router state rather than a global.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{balance, Customer, DomainError, Operation};

/// Cloneable handle to the customer collection.
///
/// Each read-modify-write sequence (uniqueness check then insert, balance
/// check then append, position lookup then remove) runs under one write
/// guard, so concurrent requests cannot interleave inside it. No lock is
/// held across an `.await` on anything but the lock acquisition itself.
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl AccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new customer with an empty statement.
    ///
    /// Rejects a cpf that is already present and leaves the store untouched
    /// in that case. A previously deleted cpf may be registered again.
    pub async fn create(
        &self,
        cpf: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Customer, DomainError> {
        let cpf = cpf.into();
        let mut customers = self.customers.write().await;

        if customers.iter().any(|c| c.cpf == cpf) {
            return Err(DomainError::CustomerAlreadyExists);
        }

        let customer = Customer::new(cpf, name);
        tracing::debug!(cpf = %customer.cpf, id = %customer.id, "account created");
        customers.push(customer.clone());

        Ok(customer)
    }

    /// Looks up a customer by cpf, returning a point-in-time clone.
    pub async fn find_by_cpf(&self, cpf: &str) -> Option<Customer> {
        let customers = self.customers.read().await;
        customers.iter().find(|c| c.cpf == cpf).cloned()
    }

    /// Replaces the customer's display name. The id, cpf, and statement are
    /// not touched.
    pub async fn rename(&self, cpf: &str, name: String) -> Result<(), DomainError> {
        let mut customers = self.customers.write().await;

        let customer = customers
            .iter_mut()
            .find(|c| c.cpf == cpf)
            .ok_or(DomainError::CustomerNotFound)?;

        customer.name = name;
        Ok(())
    }

    /// Appends a credit to the customer's statement and returns it.
    pub async fn deposit(
        &self,
        cpf: &str,
        description: Option<String>,
        amount: f64,
    ) -> Result<Operation, DomainError> {
        let mut customers = self.customers.write().await;

        let customer = customers
            .iter_mut()
            .find(|c| c.cpf == cpf)
            .ok_or(DomainError::CustomerNotFound)?;

        let operation = Operation::credit(description, amount);
        tracing::debug!(%cpf, amount, "deposit recorded");
        customer.statement.push(operation.clone());

        Ok(operation)
    }

    /// Appends a debit if the current balance covers the amount.
    ///
    /// The balance check and the append happen under the same write guard;
    /// a refused withdrawal leaves the statement untouched. Withdrawing
    /// exactly the balance is allowed.
    pub async fn withdraw(&self, cpf: &str, amount: f64) -> Result<Operation, DomainError> {
        let mut customers = self.customers.write().await;

        let customer = customers
            .iter_mut()
            .find(|c| c.cpf == cpf)
            .ok_or(DomainError::CustomerNotFound)?;

        if balance(&customer.statement) < amount {
            tracing::debug!(%cpf, amount, "withdrawal refused, insufficient balance");
            return Err(DomainError::AmountOutOfRange);
        }

        let operation = Operation::debit(amount);
        tracing::debug!(%cpf, amount, "withdrawal recorded");
        customer.statement.push(operation.clone());

        Ok(operation)
    }

    /// Removes the customer and returns a snapshot of everyone left.
    pub async fn remove(&self, cpf: &str) -> Result<Vec<Customer>, DomainError> {
        let mut customers = self.customers.write().await;

        let index = customers
            .iter()
            .position(|c| c.cpf == cpf)
            .ok_or(DomainError::CustomerNotFound)?;

        let removed = customers.remove(index);
        tracing::debug!(cpf = %removed.cpf, id = %removed.id, "account removed");

        Ok(customers.clone())
    }

    /// Snapshot of every customer currently in the store.
    pub async fn customers(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OperationKind;

    #[tokio::test]
    async fn test_create_then_find() {
        let store = AccountStore::new();

        store.create("111", "Alice").await.unwrap();

        let customer = store.find_by_cpf("111").await.unwrap();
        assert_eq!(customer.name, "Alice");
        assert!(customer.statement.is_empty());
    }

    #[tokio::test]
    async fn test_find_unknown_cpf() {
        let store = AccountStore::new();

        assert!(store.find_by_cpf("999").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_cpf_rejected() {
        let store = AccountStore::new();

        store.create("111", "Alice").await.unwrap();
        let err = store.create("111", "Bob").await.unwrap_err();

        assert_eq!(err, DomainError::CustomerAlreadyExists);
        let customers = store.customers().await;
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_deposit_appends_credit() {
        let store = AccountStore::new();
        store.create("111", "Alice").await.unwrap();

        let operation = store
            .deposit("111", Some("salary".to_string()), 1000.0)
            .await
            .unwrap();

        assert_eq!(operation.kind, OperationKind::Credit);
        assert_eq!(operation.amount, 1000.0);
        assert_eq!(operation.description.as_deref(), Some("salary"));

        let customer = store.find_by_cpf("111").await.unwrap();
        assert_eq!(customer.statement.len(), 1);
        assert_eq!(balance(&customer.statement), 1000.0);
    }

    #[tokio::test]
    async fn test_withdraw_appends_debit() {
        let store = AccountStore::new();
        store.create("111", "Alice").await.unwrap();
        store.deposit("111", None, 1000.0).await.unwrap();

        let operation = store.withdraw("111", 300.0).await.unwrap();

        assert_eq!(operation.kind, OperationKind::Debit);
        assert_eq!(operation.description, None);

        let customer = store.find_by_cpf("111").await.unwrap();
        assert_eq!(balance(&customer.statement), 700.0);
    }

    #[tokio::test]
    async fn test_withdraw_over_balance_refused() {
        let store = AccountStore::new();
        store.create("111", "Alice").await.unwrap();
        store.deposit("111", None, 700.0).await.unwrap();

        let err = store.withdraw("111", 800.0).await.unwrap_err();

        assert_eq!(err, DomainError::AmountOutOfRange);
        let customer = store.find_by_cpf("111").await.unwrap();
        assert_eq!(customer.statement.len(), 1);
        assert_eq!(balance(&customer.statement), 700.0);
    }

    #[tokio::test]
    async fn test_withdraw_exact_balance() {
        let store = AccountStore::new();
        store.create("111", "Alice").await.unwrap();
        store.deposit("111", None, 500.0).await.unwrap();

        store.withdraw("111", 500.0).await.unwrap();

        let customer = store.find_by_cpf("111").await.unwrap();
        assert_eq!(balance(&customer.statement), 0.0);
    }

    #[tokio::test]
    async fn test_withdraw_empty_statement() {
        let store = AccountStore::new();
        store.create("111", "Alice").await.unwrap();

        let err = store.withdraw("111", 1.0).await.unwrap_err();

        assert_eq!(err, DomainError::AmountOutOfRange);
    }

    #[tokio::test]
    async fn test_rename() {
        let store = AccountStore::new();
        let created = store.create("111", "Alice").await.unwrap();
        store.deposit("111", None, 10.0).await.unwrap();

        store.rename("111", "Bob".to_string()).await.unwrap();

        let customer = store.find_by_cpf("111").await.unwrap();
        assert_eq!(customer.name, "Bob");
        assert_eq!(customer.id, created.id);
        assert_eq!(customer.statement.len(), 1);
    }

    #[tokio::test]
    async fn test_rename_unknown_cpf() {
        let store = AccountStore::new();

        let err = store.rename("999", "Bob".to_string()).await.unwrap_err();

        assert_eq!(err, DomainError::CustomerNotFound);
    }

    #[tokio::test]
    async fn test_remove_returns_remaining() {
        let store = AccountStore::new();
        store.create("111", "Alice").await.unwrap();
        store.create("222", "Bob").await.unwrap();

        let remaining = store.remove("111").await.unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].cpf, "222");
        assert!(store.find_by_cpf("111").await.is_none());
    }

    #[tokio::test]
    async fn test_removed_cpf_can_register_again() {
        let store = AccountStore::new();
        let first = store.create("111", "Alice").await.unwrap();
        store.remove("111").await.unwrap();

        let second = store.create("111", "Alice").await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.statement.is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_cpf() {
        let store = AccountStore::new();

        let err = store.remove("999").await.unwrap_err();

        assert_eq!(err, DomainError::CustomerNotFound);
    }

    #[tokio::test]
    async fn test_concurrent_creates_distinct_cpfs() {
        let store = AccountStore::new();

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(format!("cpf-{i}"), format!("customer-{i}")).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.customers().await.len(), 10);
    }

    #[tokio::test]
    async fn test_concurrent_creates_same_cpf() {
        let store = AccountStore::new();

        let mut handles = Vec::new();
        for _ in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(
                async move { store.create("111", "Alice").await },
            ));
        }

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.customers().await.len(), 1);
    }
}
