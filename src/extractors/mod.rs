//! Request extractors whose rejections are `AppError`s, so every handler reports bad
//! input with the same 400 body.

mod id;
mod json;
pub use id::PathId;
pub use json::ApiJson;
