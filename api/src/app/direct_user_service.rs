//! Direct user service
//!
//! Enforces identity-record invariants and delegates storage.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{DirectUser, DirectUserId};
use crate::domain::ports::{DirectUserRepository, DirectUserUseCases};
use crate::error::DomainError;

/// Service for managing direct users
pub struct DirectUserService<R>
where
    R: DirectUserRepository,
{
    users: Arc<R>,
}

impl<R> DirectUserService<R>
where
    R: DirectUserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Look up a user, turning "no record" into `NotFound`
    async fn require(&self, id: &DirectUserId) -> Result<DirectUser, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Direct user {} not found", id)))
    }
}

fn require_id(id: &DirectUserId) -> Result<(), DomainError> {
    if id.is_empty() {
        return Err(DomainError::validation("direct user ID is required"));
    }
    Ok(())
}

fn require_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::validation("name is required"));
    }
    Ok(())
}

#[async_trait]
impl<R> DirectUserUseCases for DirectUserService<R>
where
    R: DirectUserRepository,
{
    async fn create_direct_user(&self, name: &str) -> Result<DirectUser, DomainError> {
        require_name(name)?;

        let user = DirectUser::new(name);
        self.users.save(&user).await?;

        tracing::info!(user_id = %user.id, "Created direct user");
        Ok(user)
    }

    async fn get_direct_user(&self, id: &DirectUserId) -> Result<DirectUser, DomainError> {
        require_id(id)?;

        tracing::debug!(user_id = %id, "Fetching direct user");
        self.require(id).await
    }

    async fn update_direct_user(&self, user: &DirectUser) -> Result<(), DomainError> {
        require_id(&user.id)?;
        require_name(&user.name)?;

        self.users.update(user).await?;

        tracing::info!(user_id = %user.id, "Updated direct user");
        Ok(())
    }

    async fn delete_direct_user(&self, id: &DirectUserId) -> Result<(), DomainError> {
        require_id(id)?;

        // Store delete is a no-op for missing rows
        self.require(id).await?;
        self.users.delete(id).await?;

        tracing::info!(user_id = %id, "Deleted direct user");
        Ok(())
    }
}
