//! Database access layer (PostgreSQL)
//!
//! Plain async functions over a `PgPool`. Every function returns
//! [`ServiceResult`](crate::error::ServiceResult) so handlers can `?` straight
//! into an `AppError`.

pub mod expenses;
pub mod ledger;
pub mod orders;
pub mod sales;
pub mod settings;
