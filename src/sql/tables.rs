//! Descriptors for the four canteen tables.

/// Column layout of one table. `columns` excludes the primary key and is in row order.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub pk: &'static str,
    pub columns: &'static [&'static str],
    /// Columns never written on insert; the store default applies.
    pub store_defaults: &'static [&'static str],
}

impl Table {
    /// Columns written by INSERT, in bind order.
    pub fn insert_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns
            .iter()
            .copied()
            .filter(|c| !self.store_defaults.contains(c))
    }
}

pub const USER: Table = Table {
    name: "user",
    pk: "user_id",
    columns: &["nisn", "nama", "kelas", "no_telepon", "email"],
    store_defaults: &[],
};

pub const SELLER: Table = Table {
    name: "seller",
    pk: "seller_id",
    columns: &["nama_toko", "deskripsi_toko", "no_telepon", "email"],
    store_defaults: &[],
};

pub const MENU: Table = Table {
    name: "menu",
    pk: "menu_id",
    columns: &[
        "seller_id",
        "foto_produk",
        "nama_menu",
        "deskripsi_menu",
        "harga",
        "stok",
        "loves",
        "kategori",
    ],
    store_defaults: &["loves"],
};

pub const TRANSACTION: Table = Table {
    name: "transaction",
    pk: "transaction_id",
    columns: &["user_id", "menu_id", "jumlah", "total_harga", "status"],
    store_defaults: &[],
};

/// DDL for the canteen tables. Foreign-key-shaped columns are plain BIGINTs: deleting a
/// user or menu leaves dependent transactions in place.
pub const CREATE_TABLES: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS "user" (
        "user_id" BIGSERIAL PRIMARY KEY,
        "nisn" TEXT NOT NULL,
        "nama" TEXT NOT NULL,
        "kelas" TEXT NOT NULL,
        "no_telepon" TEXT NOT NULL,
        "email" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS "seller" (
        "seller_id" BIGSERIAL PRIMARY KEY,
        "nama_toko" TEXT NOT NULL,
        "deskripsi_toko" TEXT NOT NULL,
        "no_telepon" TEXT NOT NULL,
        "email" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS "menu" (
        "menu_id" BIGSERIAL PRIMARY KEY,
        "seller_id" BIGINT NOT NULL,
        "foto_produk" TEXT NOT NULL DEFAULT '',
        "nama_menu" TEXT NOT NULL,
        "deskripsi_menu" TEXT NOT NULL DEFAULT '',
        "harga" BIGINT NOT NULL,
        "stok" BIGINT NOT NULL,
        "loves" BIGINT NOT NULL DEFAULT 0,
        "kategori" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS "transaction" (
        "transaction_id" BIGSERIAL PRIMARY KEY,
        "user_id" BIGINT NOT NULL,
        "menu_id" BIGINT NOT NULL,
        "jumlah" BIGINT NOT NULL,
        "total_harga" BIGINT NOT NULL,
        "status" TEXT NOT NULL
    )"#,
];
