use crate::error::AppError;
use crate::service::{required_email, required_text};
use serde::{Deserialize, Serialize};

/// A canteen vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Seller {
    pub seller_id: i64,
    pub nama_toko: String,
    pub deskripsi_toko: String,
    pub no_telepon: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeller {
    pub nama_toko: String,
    pub deskripsi_toko: String,
    pub no_telepon: String,
    pub email: String,
}

impl NewSeller {
    pub fn with_id(self, seller_id: i64) -> Seller {
        Seller {
            seller_id,
            nama_toko: self.nama_toko,
            deskripsi_toko: self.deskripsi_toko,
            no_telepon: self.no_telepon,
            email: self.email,
        }
    }
}

/// Body of `POST /api/sellers`.
#[derive(Debug, Default, Deserialize)]
pub struct SellerInput {
    pub nama_toko: Option<String>,
    pub deskripsi_toko: Option<String>,
    pub no_telepon: Option<String>,
    pub email: Option<String>,
}

impl SellerInput {
    pub fn validate(self) -> Result<NewSeller, AppError> {
        Ok(NewSeller {
            nama_toko: required_text("nama_toko", self.nama_toko)?,
            deskripsi_toko: required_text("deskripsi_toko", self.deskripsi_toko)?,
            no_telepon: required_text("no_telepon", self.no_telepon)?,
            email: required_email("email", self.email)?,
        })
    }
}
