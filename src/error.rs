//! Typed errors and HTTP mapping.

use crate::response::error_body;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A required body field is missing or malformed.
    #[error("{0}")]
    Validation(String),
    /// The request itself could not be decoded (path id, JSON body).
    #[error("{0}")]
    BadRequest(String),
    /// A targeted update or delete matched no row.
    #[error("{0}")]
    NotFound(String),
    /// Query, execution, or row decoding failed. `message` is what the caller sees.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Returns a mapper that wraps an `sqlx::Error` with the caller-facing message.
pub fn store_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |source| AppError::Store { message, source }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error while serving request");
            }
            _ => {
                tracing::debug!(status = %status, error = %self, "request rejected");
            }
        }
        let message = match &self {
            AppError::Config(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        (status, Json(error_body(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_covers_each_kind() {
        assert_eq!(AppError::Validation("nama is required".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::BadRequest("Invalid id".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("Menu not found".into()).status(), StatusCode::NOT_FOUND);
        let err = store_error("Error querying database")(sqlx::Error::PoolClosed);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_error_hides_driver_detail() {
        let err = store_error("Error inserting data into database")(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), "Error inserting data into database");
    }
}
