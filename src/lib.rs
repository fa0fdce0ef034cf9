//! Kantin Kita: REST backend for a school-canteen ordering platform.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, build_router, common_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, CanteenStore, MemoryStore, PgStore};
