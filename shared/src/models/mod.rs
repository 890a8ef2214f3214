//! Data models
//!
//! Shared between till-server and the dashboard (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` snowflakes, amounts are `Decimal` (serialized as JSON numbers).

pub mod expense;
pub mod ledger;
pub mod order;
pub mod sale;
pub mod settings;

// Re-exports
pub use expense::*;
pub use ledger::*;
pub use order::*;
pub use sale::*;
pub use settings::*;
