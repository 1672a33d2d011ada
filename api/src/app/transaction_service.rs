//! Transaction service
//!
//! Enforces ledger-entry invariants. Updates are a controlled merge: only the
//! amount and fund of a stored transaction can be changed by a caller.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::entities::{
    DirectUserId, FundName, Transaction, TransactionId, AMOUNT_INTEGER_DIGITS, AMOUNT_SCALE,
};
use crate::domain::ports::{TransactionRepository, TransactionUseCases};
use crate::error::DomainError;

/// Service for managing transactions
pub struct TransactionService<R>
where
    R: TransactionRepository,
{
    transactions: Arc<R>,
}

impl<R> TransactionService<R>
where
    R: TransactionRepository,
{
    pub fn new(transactions: Arc<R>) -> Self {
        Self { transactions }
    }

    /// Look up a transaction, turning "no record" into `NotFound`
    async fn require(&self, id: &TransactionId) -> Result<Transaction, DomainError> {
        self.transactions
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Transaction {} not found", id)))
    }
}

fn require_id(id: &TransactionId) -> Result<(), DomainError> {
    if id.is_empty() {
        return Err(DomainError::validation("transaction ID is required"));
    }
    Ok(())
}

fn require_user_id(user_id: &DirectUserId) -> Result<(), DomainError> {
    if user_id.is_empty() {
        return Err(DomainError::validation("user ID is required"));
    }
    Ok(())
}

fn require_storable_amount(amount: Decimal) -> Result<(), DomainError> {
    if !Transaction::amount_fits(amount) {
        return Err(DomainError::validation(format!(
            "amount {} exceeds {} integer digits or {} decimal places",
            amount, AMOUNT_INTEGER_DIGITS, AMOUNT_SCALE
        )));
    }
    Ok(())
}

fn require_known_fund(fund_name: &FundName) -> Result<(), DomainError> {
    if !fund_name.is_valid() {
        return Err(DomainError::validation(format!(
            "invalid fund name: '{}'",
            fund_name
        )));
    }
    Ok(())
}

#[async_trait]
impl<R> TransactionUseCases for TransactionService<R>
where
    R: TransactionRepository,
{
    async fn create_transaction(
        &self,
        user_id: &DirectUserId,
        amount: Decimal,
        fund_name: &FundName,
    ) -> Result<Transaction, DomainError> {
        require_user_id(user_id)?;
        if amount.is_zero() {
            return Err(DomainError::validation("amount cannot be zero"));
        }
        require_storable_amount(amount)?;
        require_known_fund(fund_name)?;

        let transaction = Transaction::new(user_id.clone(), amount, fund_name.clone());
        self.transactions.save(&transaction).await?;

        tracing::info!(
            transaction_id = %transaction.id,
            user_id = %transaction.user_id,
            amount = %transaction.amount,
            fund = %transaction.fund_name,
            "Created transaction"
        );
        Ok(transaction)
    }

    async fn get_transaction(&self, id: &TransactionId) -> Result<Transaction, DomainError> {
        require_id(id)?;

        tracing::debug!(transaction_id = %id, "Fetching transaction");
        self.require(id).await
    }

    async fn get_user_transactions(
        &self,
        user_id: &DirectUserId,
    ) -> Result<Vec<Transaction>, DomainError> {
        require_user_id(user_id)?;

        let transactions = self.transactions.find_by_user_id(user_id).await?;

        tracing::debug!(
            user_id = %user_id,
            count = transactions.len(),
            "Fetched user transactions"
        );
        Ok(transactions)
    }

    async fn update_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Transaction, DomainError> {
        require_id(&transaction.id)?;
        require_storable_amount(transaction.amount)?;
        require_known_fund(&transaction.fund_name)?;

        let mut stored = self.require(&transaction.id).await?;
        if stored.user_id != transaction.user_id {
            tracing::warn!(
                transaction_id = %stored.id,
                "Ignoring user ID in transaction update"
            );
        }

        stored.apply_update(transaction.amount, transaction.fund_name.clone());
        self.transactions.update(&stored).await?;

        tracing::info!(
            transaction_id = %stored.id,
            amount = %stored.amount,
            fund = %stored.fund_name,
            "Updated transaction"
        );
        Ok(stored)
    }

    async fn delete_transaction(&self, id: &TransactionId) -> Result<(), DomainError> {
        require_id(id)?;

        // Store delete is a no-op for missing rows
        self.require(id).await?;
        self.transactions.delete(id).await?;

        tracing::info!(transaction_id = %id, "Deleted transaction");
        Ok(())
    }
}
