//! Standard response envelope helpers.
//!
//! Collections and created entities go out bare; confirmations and errors share the
//! `{ok, message|error}` envelope.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn success_message(message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            ok: true,
            message: message.into(),
        }),
    )
}

pub fn error_body(error: String) -> ErrorBody {
    ErrorBody { ok: false, error }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelopes_serialize_with_ok_flag() {
        let (status, Json(body)) = success_message("Stock added successfully");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"ok": true, "message": "Stock added successfully"})
        );
        assert_eq!(
            serde_json::to_value(error_body("Invalid id".into())).unwrap(),
            serde_json::json!({"ok": false, "error": "Invalid id"})
        );
    }

    #[test]
    fn collections_are_bare_arrays() {
        let (status, Json(body)) = success_many(vec![1, 2, 3]);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!([1, 2, 3]));
    }
}
