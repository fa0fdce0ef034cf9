//! The `/api` route table. Every single-entity route names its parameter `:id`; the
//! parameter is parsed by `PathId`.

use crate::handlers::{menus, sellers, transactions, users};
use crate::state::AppState;
use axum::{
    routing::{delete, get, put},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id/delete", delete(users::delete))
        .route("/sellers", get(sellers::list).post(sellers::create))
        .route("/sellers/:id/delete", delete(sellers::delete))
        .route("/menus", get(menus::list).post(menus::create))
        .route("/menus/toploves", get(menus::top_loved))
        .route("/menus/:id/product", get(menus::list_by_seller))
        .route("/menus/:id/addstock", put(menus::add_stock))
        .route("/menus/:id/delete", delete(menus::delete))
        .route("/loves/:id/add", put(menus::add_love))
        .route("/transactions", get(transactions::list).post(transactions::create))
        .route("/transactions/:id/user", get(transactions::list_by_user))
        .route("/transactions/:id/changestatus", put(transactions::change_status))
        .route("/transactions/:id/delete", delete(transactions::delete))
        .with_state(state)
}
