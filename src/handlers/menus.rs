//! `/api/menus` and `/api/loves` handlers.

use super::require_affected;
use crate::error::AppError;
use crate::extractors::{ApiJson, PathId};
use crate::model::{AddStock, MenuInput};
use crate::response::{success_created, success_many, success_message};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// Size of the `toploves` leaderboard.
pub const TOP_LOVED_LIMIT: i64 = 3;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let menus = state.store.list_menus().await?;
    Ok(success_many(menus))
}

pub async fn list_by_seller(
    State(state): State<AppState>,
    PathId(seller_id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let menus = state.store.list_menus_by_seller(seller_id).await?;
    Ok(success_many(menus))
}

pub async fn top_loved(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let menus = state.store.top_loved_menus(TOP_LOVED_LIMIT).await?;
    Ok(success_many(menus))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MenuInput>,
) -> Result<impl IntoResponse, AppError> {
    let menu = state.store.create_menu(input.validate()?).await?;
    tracing::info!(menu_id = menu.menu_id, seller_id = menu.seller_id, "menu created");
    Ok(success_created(menu))
}

pub async fn add_stock(
    State(state): State<AppState>,
    PathId(id): PathId,
    ApiJson(body): ApiJson<AddStock>,
) -> Result<impl IntoResponse, AppError> {
    let delta = body.delta();
    require_affected(state.store.add_stock(id, delta).await?, "Menu not found")?;
    Ok(success_message("Stock added successfully"))
}

pub async fn add_love(State(state): State<AppState>, PathId(id): PathId) -> Result<impl IntoResponse, AppError> {
    require_affected(state.store.add_love(id).await?, "Menu not found")?;
    Ok(success_message("Loves incremented successfully"))
}

pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> Result<impl IntoResponse, AppError> {
    require_affected(state.store.delete_menu(id).await?, "Menu not found")?;
    tracing::info!(menu_id = id, "menu deleted");
    Ok(success_message("Menu deleted successfully"))
}
