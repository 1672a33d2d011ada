//! Inbound port traits
//!
//! The operations a boundary adapter (HTTP handler, CLI, RPC stub) may call.
//! Implemented by the services in the `app` layer.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::entities::{
    DirectUser, DirectUserId, FundName, Transaction, TransactionId,
};
use crate::error::DomainError;

/// Use cases for direct users
#[async_trait]
pub trait DirectUserUseCases: Send + Sync {
    /// Create a direct user. Fails with `Validation` if `name` is empty.
    async fn create_direct_user(&self, name: &str) -> Result<DirectUser, DomainError>;

    /// Get a direct user. Fails with `Validation` for an empty ID, `NotFound` if absent.
    async fn get_direct_user(&self, id: &DirectUserId) -> Result<DirectUser, DomainError>;

    /// Rename a direct user. Fails with `Validation` for an empty ID or name,
    /// `NotFound` if no such user exists.
    async fn update_direct_user(&self, user: &DirectUser) -> Result<(), DomainError>;

    /// Delete a direct user after checking that it exists
    async fn delete_direct_user(&self, id: &DirectUserId) -> Result<(), DomainError>;
}

/// Use cases for transactions
#[async_trait]
pub trait TransactionUseCases: Send + Sync {
    /// Create a transaction. Fails with `Validation` for an empty user ID,
    /// a zero amount, or an unknown fund.
    async fn create_transaction(
        &self,
        user_id: &DirectUserId,
        amount: Decimal,
        fund_name: &FundName,
    ) -> Result<Transaction, DomainError>;

    /// Get a transaction. Fails with `Validation` for an empty ID, `NotFound` if absent.
    async fn get_transaction(&self, id: &TransactionId) -> Result<Transaction, DomainError>;

    /// All transactions for a user. An unknown user yields an empty list.
    async fn get_user_transactions(
        &self,
        user_id: &DirectUserId,
    ) -> Result<Vec<Transaction>, DomainError>;

    /// Merge `amount` and `fund_name` from the input onto the stored record and
    /// persist it. Any other field on the input is ignored.
    async fn update_transaction(&self, transaction: &Transaction)
        -> Result<Transaction, DomainError>;

    /// Delete a transaction after checking that it exists
    async fn delete_transaction(&self, id: &TransactionId) -> Result<(), DomainError>;
}
