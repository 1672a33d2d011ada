//! PostgreSQL adapter for TransactionRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{DirectUserId, FundName, Transaction, TransactionId};
use crate::domain::ports::TransactionRepository;
use crate::entity::transactions;
use crate::error::DomainError;

/// PostgreSQL implementation of TransactionRepository
pub struct PostgresTransactionRepository {
    db: DatabaseConnection,
}

impl PostgresTransactionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn save(&self, transaction: &Transaction) -> Result<(), DomainError> {
        transactions::ActiveModel::from(transaction)
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TransactionId) -> Result<Option<Transaction>, DomainError> {
        let result = transactions::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_user_id(
        &self,
        user_id: &DirectUserId,
    ) -> Result<Vec<Transaction>, DomainError> {
        let results = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.as_str()))
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), DomainError> {
        // Writes every column of the merged entity; the service owns the merge
        let result = transactions::Entity::update_many()
            .set(transactions::ActiveModel::from(transaction))
            .filter(transactions::Column::Id.eq(transaction.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Transaction {} not found",
                transaction.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: &TransactionId) -> Result<(), DomainError> {
        transactions::Entity::delete_by_id(id.0.clone())
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(())
    }
}

/// Convert domain entity to a fully-set SeaORM active model
impl From<&Transaction> for transactions::ActiveModel {
    fn from(transaction: &Transaction) -> Self {
        transactions::ActiveModel {
            id: Set(transaction.id.0.clone()),
            user_id: Set(transaction.user_id.0.clone()),
            amount: Set(transaction.amount),
            fund_name: Set(transaction.fund_name.0.clone()),
            created_at: Set(transaction.created_at.fixed_offset()),
            updated_at: Set(transaction.updated_at.fixed_offset()),
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<transactions::Model> for Transaction {
    fn from(model: transactions::Model) -> Self {
        Transaction {
            id: TransactionId(model.id),
            user_id: DirectUserId(model.user_id),
            amount: model.amount,
            fund_name: FundName(model.fund_name),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
