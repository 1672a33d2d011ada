//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{DirectUser, DirectUserId, Transaction, TransactionId};
use crate::error::DomainError;

/// Repository for DirectUser entities
#[async_trait]
pub trait DirectUserRepository: Send + Sync {
    /// Persist a new direct user
    async fn save(&self, user: &DirectUser) -> Result<(), DomainError>;

    /// Find a direct user by ID. `Ok(None)` when no record exists.
    async fn find_by_id(&self, id: &DirectUserId) -> Result<Option<DirectUser>, DomainError>;

    /// Update an existing direct user. Fails with `NotFound` if no row was affected.
    async fn update(&self, user: &DirectUser) -> Result<(), DomainError>;

    /// Delete a direct user by ID
    async fn delete(&self, id: &DirectUserId) -> Result<(), DomainError>;
}

/// Repository for Transaction entities
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Persist a new transaction
    async fn save(&self, transaction: &Transaction) -> Result<(), DomainError>;

    /// Find a transaction by ID. `Ok(None)` when no record exists.
    async fn find_by_id(&self, id: &TransactionId) -> Result<Option<Transaction>, DomainError>;

    /// Find all transactions owned by a user, most recently created first
    async fn find_by_user_id(&self, user_id: &DirectUserId)
        -> Result<Vec<Transaction>, DomainError>;

    /// Store the full transaction. Fails with `NotFound` if no row was affected.
    async fn update(&self, transaction: &Transaction) -> Result<(), DomainError>;

    /// Delete a transaction by ID
    async fn delete(&self, id: &TransactionId) -> Result<(), DomainError>;
}
