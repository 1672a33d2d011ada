//! Transaction handlers
//!
//! Endpoints for recording and adjusting fund transactions.
//! Amounts travel as JSON strings (e.g. `"25000.0000"`) so they are never
//! parsed through a binary float.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::json_body;
use crate::domain::entities::{DirectUserId, FundName, Transaction, TransactionId};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating a transaction
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub fund_name: String,
}

/// Request body for updating a transaction. Only these fields can change.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub fund_name: String,
}

/// Response body for a transaction
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: String,
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub fund_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id.0,
            user_id: tx.user_id.0,
            amount: tx.amount,
            fund_name: tx.fund_name.0,
            created_at: tx.created_at.to_rfc3339(),
            updated_at: tx.updated_at.to_rfc3339(),
        }
    }
}

/// POST /transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let request = json_body(payload)?;

    let transaction = state
        .transaction_service
        .create_transaction(
            &DirectUserId(request.user_id),
            request.amount,
            &FundName(request.fund_name),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into())))
}

/// GET /transactions/:id
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = state
        .transaction_service
        .get_transaction(&TransactionId(id))
        .await?;

    Ok(Json(transaction.into()))
}

/// GET /transactions/user/:user_id
///
/// All transactions for a user, newest first. Unknown users get an empty list.
pub async fn get_user_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = state
        .transaction_service
        .get_user_transactions(&DirectUserId(user_id))
        .await?;

    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

/// PUT /transactions/:id
///
/// Change the amount and fund of a transaction. Responds with the stored record.
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTransactionRequest>, JsonRejection>,
) -> Result<Json<TransactionResponse>, AppError> {
    let request = json_body(payload)?;

    let mut transaction = state
        .transaction_service
        .get_transaction(&TransactionId(id))
        .await?;
    transaction.amount = request.amount;
    transaction.fund_name = FundName(request.fund_name);

    let updated = state
        .transaction_service
        .update_transaction(&transaction)
        .await?;

    Ok(Json(updated.into()))
}

/// DELETE /transactions/:id
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .transaction_service
        .delete_transaction(&TransactionId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
