//! Persistence seam. Handlers talk to a `CanteenStore`; `PgStore` is the production
//! implementation and `MemoryStore` stands in for it in tests and local demos.
//!
//! Targeted updates and deletes return the number of affected rows; turning zero into a
//! not-found response is the handler's job.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, ensure_tables, PgStore};

use crate::error::AppError;
use crate::model::{Menu, NewMenu, NewSeller, NewTransaction, NewUser, Seller, Transaction, User};
use async_trait::async_trait;

pub(crate) const QUERY_FAILED: &str = "Error querying database";
pub(crate) const INSERT_FAILED: &str = "Error inserting data into database";
pub(crate) const STOCK_UPDATE_FAILED: &str = "Error updating stock in the database";
pub(crate) const STATUS_UPDATE_FAILED: &str = "Error updating status in the database";
pub(crate) const LOVES_UPDATE_FAILED: &str = "Error updating loves in the database";
pub(crate) const DELETE_FAILED: &str = "Error deleting data from database";

#[async_trait]
pub trait CanteenStore: Send + Sync {
    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn create_user(&self, user: NewUser) -> Result<User, AppError>;
    async fn delete_user(&self, user_id: i64) -> Result<u64, AppError>;

    async fn list_sellers(&self) -> Result<Vec<Seller>, AppError>;
    async fn create_seller(&self, seller: NewSeller) -> Result<Seller, AppError>;
    async fn delete_seller(&self, seller_id: i64) -> Result<u64, AppError>;

    async fn list_menus(&self) -> Result<Vec<Menu>, AppError>;
    async fn list_menus_by_seller(&self, seller_id: i64) -> Result<Vec<Menu>, AppError>;
    /// Most-loved menus first, ties by id, at most `limit` rows.
    async fn top_loved_menus(&self, limit: i64) -> Result<Vec<Menu>, AppError>;
    async fn create_menu(&self, menu: NewMenu) -> Result<Menu, AppError>;
    /// Adds a signed delta to `stok`. No floor.
    async fn add_stock(&self, menu_id: i64, delta: i64) -> Result<u64, AppError>;
    /// Atomically adds one to `loves`.
    async fn add_love(&self, menu_id: i64) -> Result<u64, AppError>;
    async fn delete_menu(&self, menu_id: i64) -> Result<u64, AppError>;

    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError>;
    async fn list_transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>, AppError>;
    async fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction, AppError>;
    async fn change_status(&self, transaction_id: i64, status: &str) -> Result<u64, AppError>;
    async fn delete_transaction(&self, transaction_id: i64) -> Result<u64, AppError>;
}
