use crate::error::AppError;
use crate::service::{required_int, required_text};
use serde::{Deserialize, Serialize};

/// A menu item offered by a seller. `harga` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Menu {
    pub menu_id: i64,
    pub seller_id: i64,
    pub foto_produk: String,
    pub nama_menu: String,
    pub deskripsi_menu: String,
    pub harga: i64,
    pub stok: i64,
    pub loves: i64,
    pub kategori: String,
}

/// Validated create payload. `loves` is not part of it; the store starts it at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenu {
    pub seller_id: i64,
    pub foto_produk: String,
    pub nama_menu: String,
    pub deskripsi_menu: String,
    pub harga: i64,
    pub stok: i64,
    pub kategori: String,
}

impl NewMenu {
    pub fn with_id(self, menu_id: i64) -> Menu {
        Menu {
            menu_id,
            seller_id: self.seller_id,
            foto_produk: self.foto_produk,
            nama_menu: self.nama_menu,
            deskripsi_menu: self.deskripsi_menu,
            harga: self.harga,
            stok: self.stok,
            loves: 0,
            kategori: self.kategori,
        }
    }
}

/// Body of `POST /api/menus`. A `loves` key, if sent, is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct MenuInput {
    pub seller_id: Option<i64>,
    pub foto_produk: Option<String>,
    pub nama_menu: Option<String>,
    pub deskripsi_menu: Option<String>,
    pub harga: Option<i64>,
    pub stok: Option<i64>,
    pub kategori: Option<String>,
}

impl MenuInput {
    pub fn validate(self) -> Result<NewMenu, AppError> {
        Ok(NewMenu {
            seller_id: required_int("seller_id", self.seller_id)?,
            foto_produk: self.foto_produk.unwrap_or_default(),
            nama_menu: required_text("nama_menu", self.nama_menu)?,
            deskripsi_menu: self.deskripsi_menu.unwrap_or_default(),
            harga: required_int("harga", self.harga)?,
            stok: required_int("stok", self.stok)?,
            kategori: required_text("kategori", self.kategori)?,
        })
    }
}

/// Body of `PUT /api/menus/:id/addstock`. The delta is signed; nothing stops stock going negative.
/// A missing delta adds nothing.
#[derive(Debug, Default, Deserialize)]
pub struct AddStock {
    pub stock_to_add: Option<i64>,
}

impl AddStock {
    pub fn delta(self) -> i64 {
        self.stock_to_add.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_text_defaults_to_empty() {
        let menu = MenuInput {
            seller_id: Some(1),
            nama_menu: Some("Nasi Goreng".into()),
            harga: Some(12000),
            stok: Some(5),
            kategori: Some("makanan".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(menu.foto_produk, "");
        assert_eq!(menu.deskripsi_menu, "");
        assert_eq!(menu.with_id(3).loves, 0);
    }

    #[test]
    fn missing_price_is_rejected() {
        let err = MenuInput {
            seller_id: Some(1),
            nama_menu: Some("Es Teh".into()),
            stok: Some(10),
            kategori: Some("minuman".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "harga is required");
    }

    #[test]
    fn stock_delta_is_signed_and_defaults_to_zero() {
        let body = AddStock {
            stock_to_add: Some(-4),
        };
        assert_eq!(body.delta(), -4);
        assert_eq!(AddStock::default().delta(), 0);
    }

    #[test]
    fn zero_price_is_rejected() {
        let err = MenuInput {
            seller_id: Some(1),
            nama_menu: Some("Es Teh".into()),
            harga: Some(0),
            stok: Some(10),
            kategori: Some("minuman".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "harga is required");
    }
}
