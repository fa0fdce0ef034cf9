//! PostgreSQL-backed store. Every operation is one autocommitted statement.

use super::{
    CanteenStore, DELETE_FAILED, INSERT_FAILED, LOVES_UPDATE_FAILED, QUERY_FAILED, STATUS_UPDATE_FAILED,
    STOCK_UPDATE_FAILED,
};
use crate::error::{store_error, AppError, ConfigError};
use crate::model::{Menu, NewMenu, NewSeller, NewTransaction, NewUser, Seller, Transaction, User};
use crate::sql::{self, Table, CREATE_TABLES, MENU, SELLER, TRANSACTION, USER};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all<T>(&self, sql: &str, filter: Option<i64>) -> Result<Vec<T>, AppError>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %sql, filter = ?filter, "query");
        let mut query = sqlx::query_as::<sqlx::Postgres, T>(sql);
        if let Some(v) = filter {
            query = query.bind(v);
        }
        query.fetch_all(&self.pool).await.map_err(store_error(QUERY_FAILED))
    }

    async fn delete_by_pk(&self, table: &Table, id: i64) -> Result<u64, AppError> {
        let sql = sql::delete(table);
        tracing::debug!(sql = %sql, id, "execute");
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error(DELETE_FAILED))?;
        Ok(result.rows_affected())
    }

    async fn increment(
        &self,
        table: &Table,
        column: &str,
        id: i64,
        delta: i64,
        failure: &'static str,
    ) -> Result<u64, AppError> {
        let sql = sql::increment(table, column);
        tracing::debug!(sql = %sql, id, delta, "execute");
        let result = sqlx::query(&sql)
            .bind(delta)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error(failure))?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl CanteenStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(store_error(QUERY_FAILED))?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.fetch_all(&sql::select_all(&USER), None).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let sql = sql::insert(&USER);
        tracing::debug!(sql = %sql, "insert");
        sqlx::query_as::<_, User>(&sql)
            .bind(&user.nisn)
            .bind(&user.nama)
            .bind(&user.kelas)
            .bind(&user.no_telepon)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error(INSERT_FAILED))
    }

    async fn delete_user(&self, user_id: i64) -> Result<u64, AppError> {
        self.delete_by_pk(&USER, user_id).await
    }

    async fn list_sellers(&self) -> Result<Vec<Seller>, AppError> {
        self.fetch_all(&sql::select_all(&SELLER), None).await
    }

    async fn create_seller(&self, seller: NewSeller) -> Result<Seller, AppError> {
        let sql = sql::insert(&SELLER);
        tracing::debug!(sql = %sql, "insert");
        sqlx::query_as::<_, Seller>(&sql)
            .bind(&seller.nama_toko)
            .bind(&seller.deskripsi_toko)
            .bind(&seller.no_telepon)
            .bind(&seller.email)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error(INSERT_FAILED))
    }

    async fn delete_seller(&self, seller_id: i64) -> Result<u64, AppError> {
        self.delete_by_pk(&SELLER, seller_id).await
    }

    async fn list_menus(&self) -> Result<Vec<Menu>, AppError> {
        self.fetch_all(&sql::select_all(&MENU), None).await
    }

    async fn list_menus_by_seller(&self, seller_id: i64) -> Result<Vec<Menu>, AppError> {
        self.fetch_all(&sql::select_where(&MENU, "seller_id"), Some(seller_id))
            .await
    }

    async fn top_loved_menus(&self, limit: i64) -> Result<Vec<Menu>, AppError> {
        self.fetch_all(&sql::select_top(&MENU, "loves"), Some(limit)).await
    }

    async fn create_menu(&self, menu: NewMenu) -> Result<Menu, AppError> {
        let sql = sql::insert(&MENU);
        tracing::debug!(sql = %sql, seller_id = menu.seller_id, "insert");
        sqlx::query_as::<_, Menu>(&sql)
            .bind(menu.seller_id)
            .bind(&menu.foto_produk)
            .bind(&menu.nama_menu)
            .bind(&menu.deskripsi_menu)
            .bind(menu.harga)
            .bind(menu.stok)
            .bind(&menu.kategori)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error(INSERT_FAILED))
    }

    async fn add_stock(&self, menu_id: i64, delta: i64) -> Result<u64, AppError> {
        self.increment(&MENU, "stok", menu_id, delta, STOCK_UPDATE_FAILED)
            .await
    }

    async fn add_love(&self, menu_id: i64) -> Result<u64, AppError> {
        self.increment(&MENU, "loves", menu_id, 1, LOVES_UPDATE_FAILED)
            .await
    }

    async fn delete_menu(&self, menu_id: i64) -> Result<u64, AppError> {
        self.delete_by_pk(&MENU, menu_id).await
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        self.fetch_all(&sql::select_all(&TRANSACTION), None).await
    }

    async fn list_transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>, AppError> {
        self.fetch_all(&sql::select_where(&TRANSACTION, "user_id"), Some(user_id))
            .await
    }

    async fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction, AppError> {
        let sql = sql::insert(&TRANSACTION);
        tracing::debug!(sql = %sql, user_id = transaction.user_id, menu_id = transaction.menu_id, "insert");
        sqlx::query_as::<_, Transaction>(&sql)
            .bind(transaction.user_id)
            .bind(transaction.menu_id)
            .bind(transaction.jumlah)
            .bind(transaction.total_harga)
            .bind(&transaction.status)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error(INSERT_FAILED))
    }

    async fn change_status(&self, transaction_id: i64, status: &str) -> Result<u64, AppError> {
        let sql = sql::set_column(&TRANSACTION, "status");
        tracing::debug!(sql = %sql, transaction_id, "execute");
        let result = sqlx::query(&sql)
            .bind(status)
            .bind(transaction_id)
            .execute(&self.pool)
            .await
            .map_err(store_error(STATUS_UPDATE_FAILED))?;
        Ok(result.rows_affected())
    }

    async fn delete_transaction(&self, transaction_id: i64) -> Result<u64, AppError> {
        self.delete_by_pk(&TRANSACTION, transaction_id).await
    }
}

/// Create the four canteen tables if they do not exist. Opt-in at startup; the service
/// otherwise assumes the schema is already in place.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in CREATE_TABLES {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(store_error("Error creating tables"))?;
    }
    tracing::info!("canteen tables ensured");
    Ok(())
}

/// Create the database named in `database_url` if missing, connecting through the
/// `postgres` maintenance database.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = admin_options(database_url)?;
    let Some(db_name) = db_name.filter(|name| name != "postgres") else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin
        .connect()
        .await
        .map_err(store_error("Error connecting to database server"))?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(store_error(QUERY_FAILED))?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(store_error("Error creating database"))?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

/// Connect options for the `postgres` maintenance database on the same server, plus the
/// database name the URL targets (if its path names one).
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), AppError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| {
        AppError::Config(ConfigError::Invalid {
            key: "DATABASE_URL",
            value: e.to_string(),
        })
    })?;
    let db_name = opts
        .get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_name_comes_from_the_path() {
        let (admin, name) = admin_options("postgres://kantin:secret@db:5432/kantin_kita").unwrap();
        assert_eq!(name.as_deref(), Some("kantin_kita"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db");
        assert_eq!(admin.get_port(), 5432);
    }

    #[test]
    fn slashes_in_the_query_do_not_move_the_name() {
        let (admin, name) =
            admin_options("postgres://db/kantin_kita?sslmode=disable&sslrootcert=/etc/ssl/ca.pem").unwrap();
        assert_eq!(name.as_deref(), Some("kantin_kita"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db");
    }

    #[test]
    fn host_is_never_taken_for_the_database() {
        let (admin, name) = admin_options("postgres://localhost").unwrap();
        assert_ne!(name.as_deref(), Some("localhost"));
        assert_eq!(admin.get_host(), "localhost");
    }

    #[test]
    fn invalid_url_error_hides_credentials() {
        let err = admin_options("postgres://kantin:hunter2@[::1/kantin_kita").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid { key: "DATABASE_URL", .. })));
        assert!(!err.to_string().contains("hunter2"));
    }

    #[test]
    fn quote_ident_doubles_quotes() {
        assert_eq!(quote_ident(r#"odd"name"#), r#""odd""name""#);
    }
}
