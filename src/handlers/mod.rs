//! HTTP handlers, one per (verb, path). Each one decodes, validates, runs a single store
//! call, and maps the outcome to a response.

pub mod menus;
pub mod sellers;
pub mod transactions;
pub mod users;

use crate::error::AppError;

/// Zero affected rows on a targeted update or delete means the id does not exist.
fn require_affected(rows: u64, not_found: &str) -> Result<(), AppError> {
    if rows == 0 {
        return Err(AppError::NotFound(not_found.to_string()));
    }
    Ok(())
}
