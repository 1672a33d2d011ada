//! PostgreSQL adapter for DirectUserRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::entities::{DirectUser, DirectUserId};
use crate::domain::ports::DirectUserRepository;
use crate::entity::direct_users;
use crate::error::DomainError;

/// PostgreSQL implementation of DirectUserRepository
pub struct PostgresDirectUserRepository {
    db: DatabaseConnection,
}

impl PostgresDirectUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DirectUserRepository for PostgresDirectUserRepository {
    async fn save(&self, user: &DirectUser) -> Result<(), DomainError> {
        direct_users::ActiveModel {
            id: Set(user.id.0.clone()),
            name: Set(user.name.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &DirectUserId) -> Result<Option<DirectUser>, DomainError> {
        let result = direct_users::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn update(&self, user: &DirectUser) -> Result<(), DomainError> {
        let result = direct_users::Entity::update_many()
            .col_expr(direct_users::Column::Name, Expr::value(user.name.clone()))
            .filter(direct_users::Column::Id.eq(user.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Direct user {} not found",
                user.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: &DirectUserId) -> Result<(), DomainError> {
        direct_users::Entity::delete_by_id(id.0.clone())
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<direct_users::Model> for DirectUser {
    fn from(model: direct_users::Model) -> Self {
        DirectUser {
            id: DirectUserId(model.id),
            name: model.name,
        }
    }
}
