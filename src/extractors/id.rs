//! Numeric id from the single path parameter of a route (e.g. `/api/menus/:id/addstock`).

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathId(pub i64);

impl std::str::FromStr for PathId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(PathId)
            .map_err(|_| AppError::BadRequest("Invalid id".into()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid id".into()))?;
        raw.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers() {
        assert_eq!("42".parse::<PathId>().unwrap(), PathId(42));
        assert_eq!("-3".parse::<PathId>().unwrap(), PathId(-3));
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["", "abc", "1.5", "12a", "99999999999999999999"] {
            let err = raw.parse::<PathId>().unwrap_err();
            assert_eq!(err.to_string(), "Invalid id");
        }
    }
}
