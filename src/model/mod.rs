//! Canteen entities: stored rows, validated create payloads, and raw request bodies.

mod menu;
mod seller;
mod transaction;
mod user;

pub use menu::{AddStock, Menu, MenuInput, NewMenu};
pub use seller::{NewSeller, Seller, SellerInput};
pub use transaction::{ChangeStatus, NewTransaction, Transaction, TransactionInput};
pub use user::{NewUser, User, UserInput};
