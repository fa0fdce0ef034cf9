//! `/api/sellers` handlers.

use super::require_affected;
use crate::error::AppError;
use crate::extractors::{ApiJson, PathId};
use crate::model::SellerInput;
use crate::response::{success_created, success_many, success_message};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sellers = state.store.list_sellers().await?;
    Ok(success_many(sellers))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SellerInput>,
) -> Result<impl IntoResponse, AppError> {
    let seller = state.store.create_seller(input.validate()?).await?;
    tracing::info!(seller_id = seller.seller_id, "seller created");
    Ok(success_created(seller))
}

pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> Result<impl IntoResponse, AppError> {
    require_affected(state.store.delete_seller(id).await?, "Seller not found")?;
    tracing::info!(seller_id = id, "seller deleted");
    Ok(success_message("Seller deleted successfully"))
}
