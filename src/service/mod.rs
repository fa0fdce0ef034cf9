//! Request validation shared by handlers.

mod validation;
pub use validation::{required_email, required_int, required_text, validate_email, ValidationRules};
