//! `/api/users` handlers.

use super::require_affected;
use crate::error::AppError;
use crate::extractors::{ApiJson, PathId};
use crate::model::UserInput;
use crate::response::{success_created, success_many, success_message};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.store.list_users().await?;
    Ok(success_many(users))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UserInput>,
) -> Result<impl IntoResponse, AppError> {
    let new_user = input.validate(&state.rules)?;
    let user = state.store.create_user(new_user).await?;
    tracing::info!(user_id = user.user_id, "user created");
    Ok(success_created(user))
}

pub async fn delete(State(state): State<AppState>, PathId(id): PathId) -> Result<impl IntoResponse, AppError> {
    require_affected(state.store.delete_user(id).await?, "User not found")?;
    tracing::info!(user_id = id, "user deleted");
    Ok(success_message("User deleted successfully"))
}
