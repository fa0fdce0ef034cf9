use crate::error::AppError;
use crate::service::{required_int, required_text};
use serde::{Deserialize, Serialize};

/// One order: a user buying `jumlah` of one menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transaction {
    pub transaction_id: i64,
    pub user_id: i64,
    pub menu_id: i64,
    pub jumlah: i64,
    pub total_harga: i64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub user_id: i64,
    pub menu_id: i64,
    pub jumlah: i64,
    pub total_harga: i64,
    pub status: String,
}

impl NewTransaction {
    pub fn with_id(self, transaction_id: i64) -> Transaction {
        Transaction {
            transaction_id,
            user_id: self.user_id,
            menu_id: self.menu_id,
            jumlah: self.jumlah,
            total_harga: self.total_harga,
            status: self.status,
        }
    }
}

/// Body of `POST /api/transactions`.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionInput {
    pub user_id: Option<i64>,
    pub menu_id: Option<i64>,
    pub jumlah: Option<i64>,
    pub total_harga: Option<i64>,
    pub status: Option<String>,
}

impl TransactionInput {
    pub fn validate(self) -> Result<NewTransaction, AppError> {
        Ok(NewTransaction {
            user_id: required_int("user_id", self.user_id)?,
            menu_id: required_int("menu_id", self.menu_id)?,
            jumlah: required_int("jumlah", self.jumlah)?,
            total_harga: required_int("total_harga", self.total_harga)?,
            status: required_text("status", self.status)?,
        })
    }
}

/// Body of `PUT /api/transactions/:id/changestatus`.
#[derive(Debug, Default, Deserialize)]
pub struct ChangeStatus {
    pub status: Option<String>,
}

impl ChangeStatus {
    pub fn validate(self) -> Result<String, AppError> {
        required_text("status", self.status)
    }
}
