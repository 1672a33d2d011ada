//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod direct_users;
pub mod funds;
pub mod transactions;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

pub use direct_users::{create_direct_user, delete_direct_user, get_direct_user, update_direct_user};
pub use funds::list_fund_names;
pub use transactions::{
    create_transaction, delete_transaction, get_transaction, get_user_transactions,
    update_transaction,
};

/// Unwrap a JSON body, reporting malformed or missing payloads in the API error format
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}
