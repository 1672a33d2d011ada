//! Direct user handlers
//!
//! Endpoints for creating, reading, renaming and deleting direct users.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::json_body;
use crate::domain::entities::{DirectUser, DirectUserId};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or renaming a direct user
#[derive(Debug, Deserialize)]
pub struct DirectUserRequest {
    pub name: String,
}

/// Response body for a direct user
#[derive(Debug, Serialize)]
pub struct DirectUserResponse {
    pub id: String,
    pub name: String,
}

impl From<DirectUser> for DirectUserResponse {
    fn from(user: DirectUser) -> Self {
        Self {
            id: user.id.0,
            name: user.name,
        }
    }
}

/// POST /direct-users
pub async fn create_direct_user(
    State(state): State<AppState>,
    payload: Result<Json<DirectUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DirectUserResponse>), AppError> {
    let request = json_body(payload)?;

    let user = state
        .direct_user_service
        .create_direct_user(&request.name)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /direct-users/:id
pub async fn get_direct_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DirectUserResponse>, AppError> {
    let user = state
        .direct_user_service
        .get_direct_user(&DirectUserId(id))
        .await?;

    Ok(Json(user.into()))
}

/// PUT /direct-users/:id
///
/// Rename a direct user. The ID comes from the path.
pub async fn update_direct_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DirectUserRequest>, JsonRejection>,
) -> Result<Json<DirectUserResponse>, AppError> {
    let request = json_body(payload)?;

    let user = DirectUser {
        id: DirectUserId(id),
        name: request.name,
    };
    state.direct_user_service.update_direct_user(&user).await?;

    Ok(Json(user.into()))
}

/// DELETE /direct-users/:id
pub async fn delete_direct_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .direct_user_service
        .delete_direct_user(&DirectUserId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
