//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{DirectUser, DirectUserId, Transaction, TransactionId};
use crate::domain::ports::{DirectUserRepository, TransactionRepository};
use crate::error::DomainError;

fn store_unavailable() -> DomainError {
    DomainError::Persistence("store unavailable".to_string())
}

// ============================================================================
// In-Memory Direct User Repository
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryDirectUserRepository {
    users: Arc<RwLock<HashMap<DirectUserId, DirectUser>>>,
    failing: bool,
}

impl InMemoryDirectUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails with a persistence error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: DirectUser) -> Self {
        self.users.write().unwrap().insert(user.id.clone(), user);
        self
    }

    pub fn get(&self, id: &DirectUserId) -> Option<DirectUser> {
        self.users.read().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DirectUserRepository for InMemoryDirectUserRepository {
    async fn save(&self, user: &DirectUser) -> Result<(), DomainError> {
        if self.failing {
            return Err(store_unavailable());
        }
        let mut users = self.users.write().unwrap();
        if users.contains_key(&user.id) {
            return Err(DomainError::Persistence(format!(
                "Direct user {} already exists",
                user.id
            )));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DirectUserId) -> Result<Option<DirectUser>, DomainError> {
        if self.failing {
            return Err(store_unavailable());
        }
        Ok(self.users.read().unwrap().get(id).cloned())
    }

    async fn update(&self, user: &DirectUser) -> Result<(), DomainError> {
        if self.failing {
            return Err(store_unavailable());
        }
        let mut users = self.users.write().unwrap();
        if let Some(existing) = users.get_mut(&user.id) {
            existing.name = user.name.clone();
            Ok(())
        } else {
            Err(DomainError::NotFound(format!(
                "Direct user {} not found",
                user.id
            )))
        }
    }

    async fn delete(&self, id: &DirectUserId) -> Result<(), DomainError> {
        if self.failing {
            return Err(store_unavailable());
        }
        self.users.write().unwrap().remove(id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Transaction Repository
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryTransactionRepository {
    transactions: Arc<RwLock<HashMap<TransactionId, Transaction>>>,
    failing: bool,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails with a persistence error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a transaction for testing
    pub fn with_transaction(self, transaction: Transaction) -> Self {
        self.transactions
            .write()
            .unwrap()
            .insert(transaction.id.clone(), transaction);
        self
    }

    pub fn get(&self, id: &TransactionId) -> Option<Transaction> {
        self.transactions.read().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.transactions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn save(&self, transaction: &Transaction) -> Result<(), DomainError> {
        if self.failing {
            return Err(store_unavailable());
        }
        let mut transactions = self.transactions.write().unwrap();
        if transactions.contains_key(&transaction.id) {
            return Err(DomainError::Persistence(format!(
                "Transaction {} already exists",
                transaction.id
            )));
        }
        transactions.insert(transaction.id.clone(), transaction.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TransactionId) -> Result<Option<Transaction>, DomainError> {
        if self.failing {
            return Err(store_unavailable());
        }
        Ok(self.transactions.read().unwrap().get(id).cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: &DirectUserId,
    ) -> Result<Vec<Transaction>, DomainError> {
        if self.failing {
            return Err(store_unavailable());
        }
        let transactions = self.transactions.read().unwrap();
        let mut owned: Vec<_> = transactions
            .values()
            .filter(|t| &t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), DomainError> {
        if self.failing {
            return Err(store_unavailable());
        }
        let mut transactions = self.transactions.write().unwrap();
        // Same contract as the Postgres adapter: every field is overwritten
        match transactions.get_mut(&transaction.id) {
            Some(existing) => {
                *existing = transaction.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Transaction {} not found",
                transaction.id
            ))),
        }
    }

    async fn delete(&self, id: &TransactionId) -> Result<(), DomainError> {
        if self.failing {
            return Err(store_unavailable());
        }
        self.transactions.write().unwrap().remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FundName;
    use crate::test_utils::{dec, test_transaction};

    #[tokio::test]
    async fn transaction_update_stores_full_entity() {
        let stored = test_transaction(&DirectUserId::from("owner"));
        let repo = InMemoryTransactionRepository::new().with_transaction(stored.clone());

        let mut changed = stored.clone();
        changed.user_id = DirectUserId::from("someone-else");
        changed.apply_update(dec("30000.0000"), FundName::cushon_equities());
        repo.update(&changed).await.unwrap();

        assert_eq!(repo.get(&stored.id).unwrap(), changed);
    }

    #[tokio::test]
    async fn transaction_update_missing_is_not_found() {
        let repo = InMemoryTransactionRepository::new();

        let result = repo
            .update(&test_transaction(&DirectUserId::from("owner")))
            .await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert!(repo.is_empty());
    }
}
