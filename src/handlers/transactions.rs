//! `/api/transactions` handlers.

use super::require_affected;
use crate::error::AppError;
use crate::extractors::{ApiJson, PathId};
use crate::model::{ChangeStatus, TransactionInput};
use crate::response::{success_created, success_many, success_message};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let transactions = state.store.list_transactions().await?;
    Ok(success_many(transactions))
}

pub async fn list_by_user(
    State(state): State<AppState>,
    PathId(user_id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let transactions = state.store.list_transactions_by_user(user_id).await?;
    Ok(success_many(transactions))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TransactionInput>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = state.store.create_transaction(input.validate()?).await?;
    tracing::info!(
        transaction_id = transaction.transaction_id,
        user_id = transaction.user_id,
        menu_id = transaction.menu_id,
        "transaction created"
    );
    Ok(success_created(transaction))
}

pub async fn change_status(
    State(state): State<AppState>,
    PathId(id): PathId,
    ApiJson(body): ApiJson<ChangeStatus>,
) -> Result<impl IntoResponse, AppError> {
    let status = body.validate()?;
    require_affected(state.store.change_status(id, &status).await?, "Transaction not found")?;
    tracing::info!(transaction_id = id, status = %status, "transaction status changed");
    Ok(success_message("Status changed successfully"))
}

pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> Result<impl IntoResponse, AppError> {
    require_affected(state.store.delete_transaction(id).await?, "Transaction not found")?;
    tracing::info!(transaction_id = id, "transaction deleted");
    Ok(success_message("Transaction deleted successfully"))
}
