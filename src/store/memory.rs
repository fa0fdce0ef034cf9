//! In-process store with the same contract as `PgStore`.
//!
//! All tables sit behind one mutex, so each operation is atomic just like a single
//! autocommitted statement. `MemoryStore::unavailable()` fails every call the way a dead
//! pool does.

use super::{
    CanteenStore, DELETE_FAILED, INSERT_FAILED, LOVES_UPDATE_FAILED, QUERY_FAILED, STATUS_UPDATE_FAILED,
    STOCK_UPDATE_FAILED,
};
use crate::error::{store_error, AppError};
use crate::model::{Menu, NewMenu, NewSeller, NewTransaction, NewUser, Seller, Transaction, User};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Rows keyed by identity, plus the next identity to hand out (starts at 1).
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T: Clone> Table<T> {
    fn insert(&mut self, build: impl FnOnce(i64) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn filtered(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|r| pred(r)).cloned().collect()
    }

    fn remove(&mut self, id: i64) -> u64 {
        u64::from(self.rows.remove(&id).is_some())
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

#[derive(Default)]
struct Tables {
    users: Table<User>,
    sellers: Table<Seller>,
    menus: Table<Menu>,
    transactions: Table<Transaction>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with a closed-pool error.
    pub fn unavailable() -> Self {
        Self {
            tables: Mutex::default(),
            unavailable: true,
        }
    }

    fn tables(&self, failure: &'static str) -> Result<MutexGuard<'_, Tables>, AppError> {
        if self.unavailable {
            return Err(store_error(failure)(sqlx::Error::PoolClosed));
        }
        Ok(self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

fn overflow(failure: &'static str) -> AppError {
    store_error(failure)(sqlx::Error::Protocol("bigint out of range".into()))
}

#[async_trait]
impl CanteenStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.tables(QUERY_FAILED).map(|_| ())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables(QUERY_FAILED)?.users.all())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        Ok(self.tables(INSERT_FAILED)?.users.insert(|id| user.with_id(id)))
    }

    async fn delete_user(&self, user_id: i64) -> Result<u64, AppError> {
        Ok(self.tables(DELETE_FAILED)?.users.remove(user_id))
    }

    async fn list_sellers(&self) -> Result<Vec<Seller>, AppError> {
        Ok(self.tables(QUERY_FAILED)?.sellers.all())
    }

    async fn create_seller(&self, seller: NewSeller) -> Result<Seller, AppError> {
        Ok(self.tables(INSERT_FAILED)?.sellers.insert(|id| seller.with_id(id)))
    }

    async fn delete_seller(&self, seller_id: i64) -> Result<u64, AppError> {
        Ok(self.tables(DELETE_FAILED)?.sellers.remove(seller_id))
    }

    async fn list_menus(&self) -> Result<Vec<Menu>, AppError> {
        Ok(self.tables(QUERY_FAILED)?.menus.all())
    }

    async fn list_menus_by_seller(&self, seller_id: i64) -> Result<Vec<Menu>, AppError> {
        Ok(self
            .tables(QUERY_FAILED)?
            .menus
            .filtered(|m| m.seller_id == seller_id))
    }

    async fn top_loved_menus(&self, limit: i64) -> Result<Vec<Menu>, AppError> {
        let mut menus = self.tables(QUERY_FAILED)?.menus.all();
        menus.sort_by(|a, b| b.loves.cmp(&a.loves).then(a.menu_id.cmp(&b.menu_id)));
        menus.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(menus)
    }

    async fn create_menu(&self, menu: NewMenu) -> Result<Menu, AppError> {
        Ok(self.tables(INSERT_FAILED)?.menus.insert(|id| menu.with_id(id)))
    }

    async fn add_stock(&self, menu_id: i64, delta: i64) -> Result<u64, AppError> {
        let mut tables = self.tables(STOCK_UPDATE_FAILED)?;
        let Some(menu) = tables.menus.rows.get_mut(&menu_id) else {
            return Ok(0);
        };
        menu.stok = menu
            .stok
            .checked_add(delta)
            .ok_or_else(|| overflow(STOCK_UPDATE_FAILED))?;
        Ok(1)
    }

    async fn add_love(&self, menu_id: i64) -> Result<u64, AppError> {
        let mut tables = self.tables(LOVES_UPDATE_FAILED)?;
        let Some(menu) = tables.menus.rows.get_mut(&menu_id) else {
            return Ok(0);
        };
        menu.loves = menu
            .loves
            .checked_add(1)
            .ok_or_else(|| overflow(LOVES_UPDATE_FAILED))?;
        Ok(1)
    }

    async fn delete_menu(&self, menu_id: i64) -> Result<u64, AppError> {
        Ok(self.tables(DELETE_FAILED)?.menus.remove(menu_id))
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.tables(QUERY_FAILED)?.transactions.all())
    }

    async fn list_transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>, AppError> {
        Ok(self
            .tables(QUERY_FAILED)?
            .transactions
            .filtered(|t| t.user_id == user_id))
    }

    async fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction, AppError> {
        Ok(self
            .tables(INSERT_FAILED)?
            .transactions
            .insert(|id| transaction.with_id(id)))
    }

    async fn change_status(&self, transaction_id: i64, status: &str) -> Result<u64, AppError> {
        let mut tables = self.tables(STATUS_UPDATE_FAILED)?;
        let Some(transaction) = tables.transactions.rows.get_mut(&transaction_id) else {
            return Ok(0);
        };
        transaction.status = status.to_string();
        Ok(1)
    }

    async fn delete_transaction(&self, transaction_id: i64) -> Result<u64, AppError> {
        Ok(self.tables(DELETE_FAILED)?.transactions.remove(transaction_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_menu(nama: &str) -> NewMenu {
        NewMenu {
            seller_id: 1,
            foto_produk: String::new(),
            nama_menu: nama.into(),
            deskripsi_menu: String::new(),
            harga: 5000,
            stok: 10,
            kategori: "makanan".into(),
        }
    }

    #[tokio::test]
    async fn identities_are_never_reused() {
        let store = MemoryStore::new();
        let first = store.create_menu(new_menu("Bakso")).await.unwrap();
        assert_eq!(store.delete_menu(first.menu_id).await.unwrap(), 1);
        let second = store.create_menu(new_menu("Soto")).await.unwrap();
        assert!(second.menu_id > first.menu_id);
    }

    #[tokio::test]
    async fn stock_overflow_is_a_store_error() {
        let store = MemoryStore::new();
        let menu = store.create_menu(new_menu("Bakso")).await.unwrap();
        let err = store.add_stock(menu.menu_id, i64::MAX).await.unwrap_err();
        assert_eq!(err.to_string(), STOCK_UPDATE_FAILED);
        assert_eq!(store.list_menus().await.unwrap()[0].stok, 10);
    }

    #[tokio::test]
    async fn top_loved_breaks_ties_by_id() {
        let store = MemoryStore::new();
        for nama in ["a", "b", "c", "d"] {
            store.create_menu(new_menu(nama)).await.unwrap();
        }
        store.add_love(4).await.unwrap();
        let top = store.top_loved_menus(3).await.unwrap();
        let ids: Vec<i64> = top.iter().map(|m| m.menu_id).collect();
        assert_eq!(ids, vec![4, 1, 2]);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryStore::unavailable();
        assert!(store.ping().await.is_err());
        let err = store.list_users().await.unwrap_err();
        assert_eq!(err.to_string(), QUERY_FAILED);
    }
}
